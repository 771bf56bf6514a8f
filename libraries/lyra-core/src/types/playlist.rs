/// Playlist domain types
use crate::types::{PlaylistId, Song, SongId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-owned playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Owner user ID
    pub user_id: UserId,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Eagerly-loaded songs (optional; present when the catalog expands them)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub songs: Option<Vec<Song>>,
}

impl Playlist {
    /// Create a new playlist
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            user_id,
            created_at: Utc::now(),
            songs: None,
        }
    }
}

/// A like relating a user to a song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    /// Liking user
    pub user_id: UserId,

    /// Liked song
    pub song_id: SongId,
}
