//! `CatalogStore` / `IdentityProvider` implementations for [`CatalogClient`].
//!
//! Bridges the HTTP client to the `lyra-core` collaborator contracts so
//! callers can hold the service behind a trait object.

use crate::client::CatalogClient;
use async_trait::async_trait;
use lyra_core::types::{Playlist, PlaylistId, Song, SongId, User, UserId};
use lyra_core::{CatalogStore, IdentityProvider, SessionEvent, SongFilter};
use tokio::sync::broadcast;

#[async_trait]
impl CatalogStore for CatalogClient {
    async fn fetch_songs(&self, filter: SongFilter) -> lyra_core::Result<Vec<Song>> {
        Ok(self.songs().fetch(filter).await?)
    }

    async fn fetch_playlists(&self, user_id: &UserId) -> lyra_core::Result<Vec<Playlist>> {
        Ok(self.playlists().for_user(user_id).await?)
    }

    async fn create_playlist(
        &self,
        user_id: &UserId,
        name: &str,
    ) -> lyra_core::Result<Playlist> {
        Ok(self.playlists().create(user_id, name).await?)
    }

    async fn delete_playlist(&self, id: &PlaylistId) -> lyra_core::Result<()> {
        Ok(self.playlists().delete(id).await?)
    }

    async fn create_like(&self, user_id: &UserId, song_id: &SongId) -> lyra_core::Result<()> {
        Ok(self.likes().create(user_id, song_id).await?)
    }

    async fn delete_like(&self, user_id: &UserId, song_id: &SongId) -> lyra_core::Result<()> {
        Ok(self.likes().delete(user_id, song_id).await?)
    }

    async fn liked_song_ids(&self, user_id: &UserId) -> lyra_core::Result<Vec<SongId>> {
        Ok(self.likes().song_ids_for_user(user_id).await?)
    }

    async fn update_like_count(&self, song_id: &SongId, delta: i32) -> lyra_core::Result<()> {
        Ok(self.songs().update_like_count(song_id, delta).await?)
    }
}

#[async_trait]
impl IdentityProvider for CatalogClient {
    async fn current_user(&self) -> lyra_core::Result<Option<User>> {
        Ok(self.auth().current_user().await?)
    }

    fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.subscribe_sessions()
    }
}
