/// Collaborator contracts for Lyra Player
///
/// The playback engine consumes `Song` records and nothing else; these
/// traits describe the remote services the rest of the client talks to.
use crate::error::Result;
use crate::types::{Playlist, PlaylistId, Song, SongId, User, UserId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Filter for catalog song queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SongFilter {
    /// Most recently added songs, newest first
    Recent {
        /// Maximum number of songs to return
        limit: u32,
    },

    /// A single song by ID
    ById(SongId),

    /// All songs by an artist (exact match)
    ByArtist(String),

    /// All songs on an album (exact match)
    ByAlbum(String),

    /// Free-text search over title, artist, and album
    Search(String),
}

/// Catalog store contract
///
/// Async read/write operations over songs, playlists, and likes, backed by
/// a remote data service. Implementations own transport and persistence.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Fetch songs matching a filter
    async fn fetch_songs(&self, filter: SongFilter) -> Result<Vec<Song>>;

    /// Fetch all playlists owned by a user
    async fn fetch_playlists(&self, user_id: &UserId) -> Result<Vec<Playlist>>;

    /// Create a playlist for a user
    async fn create_playlist(&self, user_id: &UserId, name: &str) -> Result<Playlist>;

    /// Delete a playlist
    async fn delete_playlist(&self, id: &PlaylistId) -> Result<()>;

    /// Record that a user likes a song
    async fn create_like(&self, user_id: &UserId, song_id: &SongId) -> Result<()>;

    /// Remove a user's like from a song
    async fn delete_like(&self, user_id: &UserId, song_id: &SongId) -> Result<()>;

    /// Fetch the IDs of all songs a user has liked
    async fn liked_song_ids(&self, user_id: &UserId) -> Result<Vec<SongId>>;

    /// Adjust a song's like count by +1 or -1
    async fn update_like_count(&self, song_id: &SongId, delta: i32) -> Result<()>;
}

/// Session change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A user signed in
    SignedIn(User),

    /// The current user signed out
    SignedOut,
}

/// Identity provider contract
///
/// Exposes current-user identity and session-change notifications. The
/// playback engine never calls this; the presentation layer gates actions
/// (e.g. liking requires a signed-in user).
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The currently signed-in user, or `None`
    async fn current_user(&self) -> Result<Option<User>>;

    /// Subscribe to sign-in/sign-out notifications
    fn subscribe(&self) -> tokio::sync::broadcast::Receiver<SessionEvent>;
}
