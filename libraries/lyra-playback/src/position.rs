//! Playback position read-model
//!
//! Derived progress indicator state, not part of the authoritative engine
//! state. The host samples the live handle at a short fixed interval
//! (~100 ms) while playing; the last sampled offset survives a pause so
//! resuming does not reset the indicator.

use std::time::Duration;

/// Sampled playback offset for the current song
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionTracker {
    offset: Duration,
}

impl PositionTracker {
    /// Create a tracker at offset zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly sampled offset from the live handle
    pub fn sample(&mut self, offset: Duration) {
        self.offset = offset;
    }

    /// Overwrite the offset immediately (seek write-through)
    pub fn set(&mut self, offset: Duration) {
        self.offset = offset;
    }

    /// Reset to zero for a newly bound song
    pub fn reset(&mut self) {
        self.offset = Duration::ZERO;
    }

    /// Last known playback offset
    pub fn offset(&self) -> Duration {
        self.offset
    }
}
