//! Lyra Player Catalog Client
//!
//! HTTP client library for the Lyra catalog and identity service.
//!
//! # Features
//!
//! - **Songs**: fetch by recency, id, artist, album, or free-text search;
//!   like-count updates
//! - **Playlists**: fetch per user, create, delete
//! - **Likes**: create, delete, liked-song lookup
//! - **Identity**: sign-in/sign-out, current user, session-change
//!   notifications
//!
//! The client also implements the `lyra-core` [`CatalogStore`] and
//! [`IdentityProvider`] contracts, so the rest of the application can hold
//! it behind trait objects.
//!
//! [`CatalogStore`]: lyra_core::CatalogStore
//! [`IdentityProvider`]: lyra_core::IdentityProvider
//!
//! # Example
//!
//! ```ignore
//! use lyra_catalog::{CatalogClient, ServiceConfig};
//! use lyra_core::SongFilter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServiceConfig::new("https://catalog.example.com");
//!     let client = CatalogClient::new(config)?;
//!
//!     // Browse the newest songs
//!     let songs = client.songs().fetch(SongFilter::Recent { limit: 20 }).await?;
//!     println!("Found {} songs", songs.len());
//!
//!     // Sign in and like the first one
//!     let user = client.auth().sign_in("user@example.com", "password").await?;
//!     if let Some(song) = songs.first() {
//!         client.likes().create(&user.id, &song.id).await?;
//!         client.songs().update_like_count(&song.id, 1).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod error;
mod likes;
mod playlists;
mod songs;
mod store;
mod types;

// Re-export main types
pub use client::CatalogClient;
pub use error::{CatalogError, Result};
pub use types::{
    CreateLikeRequest, CreatePlaylistRequest, LikedSongRow, ServiceConfig, SignInRequest,
    SignInResponse,
};

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use likes::LikesClient;
pub use playlists::PlaylistsClient;
pub use songs::SongsClient;
