/// Song domain type
use crate::types::SongId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A song in the catalog
///
/// Immutable catalog record except for the locally-cached counters
/// (`likes`, `play_count`) and the per-viewer `is_liked` decoration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Duration in seconds
    pub duration_secs: u32,

    /// Cover image URL
    pub cover_url: String,

    /// Audio resource URL
    pub audio_url: String,

    /// When the song was added to the catalog
    pub created_at: DateTime<Utc>,

    /// Number of likes
    pub likes: u32,

    /// Number of times the song has been played
    #[serde(default)]
    pub play_count: u32,

    /// Whether the current viewer has liked this song
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_liked: Option<bool>,
}

impl Song {
    /// Create a new song with minimal metadata
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
    ) -> Self {
        Self {
            id: SongId::generate(),
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            duration_secs: 0,
            cover_url: String::new(),
            audio_url: String::new(),
            created_at: Utc::now(),
            likes: 0,
            play_count: 0,
            is_liked: None,
        }
    }

    /// Get the song duration as a Duration
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_secs))
    }
}
