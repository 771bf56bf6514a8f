//! Lyra Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Lyra Player.
//!
//! This crate provides the foundational building blocks shared by the
//! playback engine and the catalog client:
//! - **Domain Types**: `Song`, `Playlist`, `User` and their typed IDs
//! - **Collaborator Contracts**: `CatalogStore`, `IdentityProvider`
//! - **Error Handling**: Unified `LyraError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use lyra_core::types::Song;
//!
//! let song = Song::new("Midnight Drive", "Nova Carter", "Afterglow");
//! assert_eq!(song.play_count, 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{LyraError, Result};
pub use traits::{CatalogStore, IdentityProvider, SessionEvent, SongFilter};
pub use types::{Playlist, PlaylistId, Song, SongId, User, UserId};
