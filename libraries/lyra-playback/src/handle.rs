//! Platform-agnostic audio handle abstraction
//!
//! Abstracts the live audio resource for different hosts (web audio
//! element, native output, test double). The engine owns at most one
//! handle at a time; dropping a handle stops it and frees its resources.

use crate::error::Result;
use lyra_core::types::Song;
use std::time::Duration;

/// A live audio resource bound to one song's audio stream
///
/// The handle owns decode/playback resources until dropped. Implementations
/// release everything in `Drop`; the engine never half-releases a handle.
pub trait AudioHandle: Send {
    /// Start or resume playback
    fn play(&mut self);

    /// Pause playback in place; position and resources are retained
    fn pause(&mut self);

    /// Apply a volume level in [0, 1]
    fn set_volume(&mut self, volume: f32);

    /// Move the playback position
    fn seek(&mut self, position: Duration);

    /// Current playback offset from the start of the song
    fn position(&self) -> Duration;

    /// Total duration, once known (`None` while the resource is loading)
    fn duration(&self) -> Option<Duration>;
}

/// Factory for audio handles
///
/// `load` binds a handle to the song's audio resource and begins playback.
/// Loading is asynchronous: the handle starts playing as soon as the
/// resource is ready, and the outcome arrives later as a [`HandleEvent`]
/// carrying the generation the handle was constructed with. `load` itself
/// fails only when the resource is rejected outright.
pub trait AudioBackend: Send {
    /// Construct a new handle for `song` at the given volume
    fn load(&mut self, song: &Song, volume: f32, generation: u64) -> Result<Box<dyn AudioHandle>>;
}

/// Asynchronous notification from an audio handle
///
/// Each event carries the generation of the handle that produced it. The
/// engine discards events whose generation does not match its current
/// handle, so a superseded handle cannot resurrect itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleEvent {
    /// The audio resource finished loading
    Loaded {
        /// Generation of the originating handle
        generation: u64,
    },

    /// The audio resource could not be fetched or decoded
    LoadFailed {
        /// Generation of the originating handle
        generation: u64,
        /// Backend-provided failure description
        message: String,
    },

    /// Playback reached the end of the song
    Ended {
        /// Generation of the originating handle
        generation: u64,
    },
}

impl HandleEvent {
    /// Generation of the handle that produced this event
    pub fn generation(&self) -> u64 {
        match self {
            Self::Loaded { generation }
            | Self::LoadFailed { generation, .. }
            | Self::Ended { generation } => *generation,
        }
    }
}
