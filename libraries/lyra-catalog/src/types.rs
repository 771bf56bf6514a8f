//! Types for catalog service API requests and responses.

use lyra_core::types::{SongId, User};
use serde::{Deserialize, Serialize};

/// Configuration for connecting to the catalog service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the service (e.g., "https://catalog.example.com")
    pub url: String,
    /// Current access token (if authenticated)
    pub access_token: Option<String>,
}

impl ServiceConfig {
    /// Create a new service config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: None,
        }
    }

    /// Create a config with an existing token.
    pub fn with_token(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: Some(access_token.into()),
        }
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for the sign-in endpoint.
#[derive(Debug, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Response from a successful sign-in.
#[derive(Debug, Deserialize)]
pub struct SignInResponse {
    pub access_token: String,
    /// Token validity in seconds
    pub expires_in: u64,
    pub user: User,
}

// =============================================================================
// Playlist Types
// =============================================================================

/// Request body for playlist creation.
#[derive(Debug, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
}

// =============================================================================
// Like Types
// =============================================================================

/// Request body for like creation.
#[derive(Debug, Serialize)]
pub struct CreateLikeRequest {
    pub song_id: SongId,
}

/// One row of a user's liked songs.
#[derive(Debug, Deserialize)]
pub struct LikedSongRow {
    pub song_id: SongId,
}
