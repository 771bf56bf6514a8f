//! Lyra Player - Playback Engine
//!
//! Platform-agnostic playback engine for Lyra Player.
//!
//! This crate provides:
//! - A single-owner audio handle lifecycle (at most one live handle)
//! - A FIFO play queue with next/previous semantics
//! - A bounded, deduplicated recently-played history
//! - Volume control propagated to the live handle
//! - Playback position tracking with seek write-through
//!
//! # Architecture
//!
//! `lyra-playback` is completely platform-agnostic: no dependency on any
//! audio stack or on `lyra-catalog`. The host provides the audio resource
//! via the [`AudioBackend`] / [`AudioHandle`] traits and feeds resource
//! notifications (loaded, load failed, ended) back into the engine as
//! [`HandleEvent`]s. Each handle is tagged with a generation counter;
//! notifications from a superseded handle are discarded, so rapid
//! `play(A)`, `play(B)` sequences can never resurrect `A`.
//!
//! All state transitions run through `&mut PlaybackEngine` on one logical
//! thread, in response to user actions or handle notifications processed
//! one at a time in arrival order.
//!
//! # Example
//!
//! ```rust
//! use lyra_core::types::Song;
//! use lyra_playback::{
//!     AudioBackend, AudioHandle, PlaybackConfig, PlaybackEngine, Result,
//! };
//! use std::time::Duration;
//!
//! // Implement the audio seam for your platform
//! struct SilentHandle;
//!
//! impl AudioHandle for SilentHandle {
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn set_volume(&mut self, _volume: f32) {}
//!     fn seek(&mut self, _position: Duration) {}
//!     fn position(&self) -> Duration {
//!         Duration::ZERO
//!     }
//!     fn duration(&self) -> Option<Duration> {
//!         None
//!     }
//! }
//!
//! struct SilentBackend;
//!
//! impl AudioBackend for SilentBackend {
//!     fn load(
//!         &mut self,
//!         _song: &Song,
//!         _volume: f32,
//!         _generation: u64,
//!     ) -> Result<Box<dyn AudioHandle>> {
//!         Ok(Box::new(SilentHandle))
//!     }
//! }
//!
//! // Drive the engine
//! let mut engine = PlaybackEngine::new(Box::new(SilentBackend), PlaybackConfig::default());
//! let song = Song::new("Midnight Drive", "Nova Carter", "Afterglow");
//!
//! engine.add_to_queue(song.clone());
//! engine.play(Some(&song)).unwrap();
//! assert!(engine.is_playing());
//!
//! engine.set_volume(0.3);
//! engine.pause();
//! assert!(!engine.is_playing());
//! ```

mod engine;
mod error;
mod events;
mod handle;
mod history;
mod position;
mod queue;
pub mod types;

// Public exports
pub use engine::PlaybackEngine;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use handle::{AudioBackend, AudioHandle, HandleEvent};
pub use history::RecentlyPlayed;
pub use position::PositionTracker;
pub use queue::PlayQueue;
pub use types::{EngineState, PlaybackConfig};
