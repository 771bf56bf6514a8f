//! Core types for the playback engine

use serde::{Deserialize, Serialize};

/// Engine state machine
///
/// Transitions are driven only by the public operations plus the three
/// resource notifications (`Loaded`, `LoadFailed`, `Ended`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// No song bound, no handle
    Idle,

    /// Handle bound and told to play; resource still loading
    Loading,

    /// Audio audible
    Playing,

    /// Paused mid-song; handle and position retained
    Paused,

    /// Last load failed; waiting for a new play request
    Failed,
}

/// Configuration for the playback engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Maximum recently-played history size (default: 5)
    pub history_size: usize,

    /// Initial volume in [0, 1] (default: 1.0)
    pub volume: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            history_size: 5,
            volume: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.history_size, 5);
        assert_eq!(config.volume, 1.0);
    }
}
