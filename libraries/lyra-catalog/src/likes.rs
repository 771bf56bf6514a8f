//! Like operations.

use crate::client::CatalogClient;
use crate::error::{CatalogError, Result};
use crate::types::{CreateLikeRequest, LikedSongRow};
use lyra_core::types::{SongId, UserId};
use tracing::debug;

/// Likes client for the catalog service.
pub struct LikesClient<'a> {
    client: &'a CatalogClient,
}

impl<'a> LikesClient<'a> {
    pub(crate) fn new(client: &'a CatalogClient) -> Self {
        Self { client }
    }

    /// Record that a user likes a song.
    pub async fn create(&self, user_id: &UserId, song_id: &SongId) -> Result<()> {
        let (base_url, token) = self.client.snapshot().await;
        let url = format!("{}/api/users/{}/likes", base_url, user_id);

        debug!(url = %url, user_id = %user_id, song_id = %song_id, "Creating like");

        let body = CreateLikeRequest {
            song_id: song_id.clone(),
        };

        let mut request = self.client.http().post(&url).json(&body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 401 {
            Err(CatalogError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CatalogError::Server {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Remove a user's like from a song.
    pub async fn delete(&self, user_id: &UserId, song_id: &SongId) -> Result<()> {
        let (base_url, token) = self.client.snapshot().await;
        let url = format!("{}/api/users/{}/likes/{}", base_url, user_id, song_id);

        debug!(url = %url, user_id = %user_id, song_id = %song_id, "Deleting like");

        let mut request = self.client.http().delete(&url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() || status.as_u16() == 204 {
            Ok(())
        } else if status.as_u16() == 401 {
            Err(CatalogError::AuthRequired)
        } else if status.as_u16() == 404 {
            // Already removed, that's fine
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CatalogError::Server {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Fetch the IDs of all songs a user has liked.
    pub async fn song_ids_for_user(&self, user_id: &UserId) -> Result<Vec<SongId>> {
        let (base_url, token) = self.client.snapshot().await;
        let url = format!("{}/api/users/{}/likes", base_url, user_id);

        debug!(url = %url, user_id = %user_id, "Fetching liked songs");

        let mut request = self.client.http().get(&url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let rows: Vec<LikedSongRow> = response.json().await.map_err(|e| {
                CatalogError::Parse(format!("Failed to parse likes response: {}", e))
            })?;

            debug!(results = rows.len(), "Fetched liked songs");
            Ok(rows.into_iter().map(|row| row.song_id).collect())
        } else if status.as_u16() == 401 {
            Err(CatalogError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CatalogError::Server {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
