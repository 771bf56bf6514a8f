//! Song catalog operations.

use crate::client::CatalogClient;
use crate::error::{CatalogError, Result};
use lyra_core::types::{Song, SongId};
use lyra_core::SongFilter;
use tracing::debug;

/// Songs client for the catalog service.
pub struct SongsClient<'a> {
    client: &'a CatalogClient,
}

impl<'a> SongsClient<'a> {
    pub(crate) fn new(client: &'a CatalogClient) -> Self {
        Self { client }
    }

    /// Fetch songs matching a filter.
    ///
    /// `SongFilter::ById` yields zero or one song; the other filters yield
    /// any number of matches.
    pub async fn fetch(&self, filter: SongFilter) -> Result<Vec<Song>> {
        let (base_url, token) = self.client.snapshot().await;

        let url = match &filter {
            SongFilter::Recent { limit } => {
                format!("{}/api/catalog/songs?order=recent&limit={}", base_url, limit)
            }
            SongFilter::ById(id) => format!("{}/api/catalog/songs/{}", base_url, id),
            SongFilter::ByArtist(artist) => {
                format!(
                    "{}/api/catalog/songs?artist={}",
                    base_url,
                    urlencoding::encode(artist)
                )
            }
            SongFilter::ByAlbum(album) => {
                format!(
                    "{}/api/catalog/songs?album={}",
                    base_url,
                    urlencoding::encode(album)
                )
            }
            SongFilter::Search(query) => {
                format!(
                    "{}/api/catalog/songs/search?q={}",
                    base_url,
                    urlencoding::encode(query)
                )
            }
        };

        debug!(url = %url, "Fetching songs");

        let mut request = self.client.http().get(&url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                CatalogError::Unreachable(e.to_string())
            } else {
                CatalogError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            if let SongFilter::ById(_) = filter {
                let song: Song = response.json().await.map_err(|e| {
                    CatalogError::Parse(format!("Failed to parse song response: {}", e))
                })?;
                Ok(vec![song])
            } else {
                let songs: Vec<Song> = response.json().await.map_err(|e| {
                    CatalogError::Parse(format!("Failed to parse songs response: {}", e))
                })?;

                debug!(results = songs.len(), "Fetched songs");
                Ok(songs)
            }
        } else if status.as_u16() == 401 {
            Err(CatalogError::AuthRequired)
        } else if status.as_u16() == 404 {
            // ById misses come back empty rather than as an error
            Ok(Vec::new())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CatalogError::Server {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Adjust a song's like count by +1 or -1.
    pub async fn update_like_count(&self, song_id: &SongId, delta: i32) -> Result<()> {
        let (base_url, token) = self.client.snapshot().await;

        let action = if delta >= 0 { "increment" } else { "decrement" };
        let url = format!(
            "{}/api/catalog/songs/{}/likes/{}",
            base_url, song_id, action
        );

        debug!(url = %url, song_id = %song_id, action = %action, "Updating like count");

        let mut request = self.client.http().post(&url);
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
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}
