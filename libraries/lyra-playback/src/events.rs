//! Playback events
//!
//! Event-based communication for presentation synchronization. Events are
//! buffered by the engine and drained by the host each loop iteration.

use crate::types::EngineState;
use lyra_core::types::SongId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Engine state changed (playing, paused, failed, ...)
    StateChanged {
        /// The new engine state
        state: EngineState,
    },

    /// A different song was bound to the audio handle
    SongChanged {
        /// ID of the new current song
        song_id: SongId,
        /// ID of the previous song (if any)
        previous_song_id: Option<SongId>,
    },

    /// The current song finished playing naturally
    SongFinished {
        /// ID of the finished song
        song_id: SongId,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level in [0, 1]
        volume: f32,
    },

    /// Queue changed (song added or consumed)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Periodic position update while playing
    PositionUpdate {
        /// Current playback position in milliseconds
        position_ms: u64,
        /// Total song duration in milliseconds, once known
        duration_ms: Option<u64>,
    },

    /// A recoverable error occurred
    Error {
        /// Error message
        message: String,
    },
}
