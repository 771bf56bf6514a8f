//! Playlist operations.

use crate::client::CatalogClient;
use crate::error::{CatalogError, Result};
use crate::types::CreatePlaylistRequest;
use lyra_core::types::{Playlist, PlaylistId, UserId};
use tracing::debug;

/// Playlists client for the catalog service.
pub struct PlaylistsClient<'a> {
    client: &'a CatalogClient,
}

impl<'a> PlaylistsClient<'a> {
    pub(crate) fn new(client: &'a CatalogClient) -> Self {
        Self { client }
    }

    /// Fetch all playlists owned by a user.
    pub async fn for_user(&self, user_id: &UserId) -> Result<Vec<Playlist>> {
        let (base_url, token) = self.client.snapshot().await;
        let url = format!("{}/api/users/{}/playlists", base_url, user_id);

        debug!(url = %url, user_id = %user_id, "Fetching playlists");

        let mut request = self.client.http().get(&url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let playlists: Vec<Playlist> = response.json().await.map_err(|e| {
                CatalogError::Parse(format!("Failed to parse playlists response: {}", e))
            })?;

            debug!(results = playlists.len(), "Fetched playlists");
            Ok(playlists)
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

    /// Create a playlist for a user.
    pub async fn create(&self, user_id: &UserId, name: &str) -> Result<Playlist> {
        let (base_url, token) = self.client.snapshot().await;
        let url = format!("{}/api/users/{}/playlists", base_url, user_id);

        debug!(url = %url, user_id = %user_id, name = %name, "Creating playlist");

        let body = CreatePlaylistRequest {
            name: name.to_string(),
        };

        let mut request = self.client.http().post(&url).json(&body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let playlist: Playlist = response.json().await.map_err(|e| {
                CatalogError::Parse(format!("Failed to parse playlist response: {}", e))
            })?;

            Ok(playlist)
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

    /// Delete a playlist.
    pub async fn delete(&self, id: &PlaylistId) -> Result<()> {
        let (base_url, token) = self.client.snapshot().await;
        let url = format!("{}/api/playlists/{}", base_url, id);

        debug!(url = %url, playlist_id = %id, "Deleting playlist");

        let mut request = self.client.http().delete(&url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() || status.as_u16() == 204 {
            debug!(playlist_id = %id, "Playlist deleted");
            Ok(())
        } else if status.as_u16() == 401 {
            Err(CatalogError::AuthRequired)
        } else if status.as_u16() == 404 {
            // Already deleted, that's fine
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CatalogError::Server {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
