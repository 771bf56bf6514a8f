//! Error types for the playback engine

use lyra_core::types::SongId;
use thiserror::Error;

/// Playback errors
///
/// All errors are recovered locally: the engine logs, emits an `Error`
/// event, and leaves its state last-known-good. There is no retry policy;
/// a new explicit `play` call is the only retry.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No song was provided to `play`
    #[error("No song provided to play")]
    NoSong,

    /// The audio resource for a song could not be loaded
    #[error("Failed to load audio for song {song_id}: {message}")]
    LoadFailed {
        /// Song whose resource failed to load
        song_id: SongId,
        /// Backend-provided failure description
        message: String,
    },
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
