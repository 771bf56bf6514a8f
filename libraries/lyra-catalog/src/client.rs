//! Main catalog service client.

use crate::auth::AuthClient;
use crate::error::{CatalogError, Result};
use crate::likes::LikesClient;
use crate::playlists::PlaylistsClient;
use crate::songs::SongsClient;
use crate::types::ServiceConfig;
use lyra_core::types::User;
use lyra_core::SessionEvent;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};

/// Session event channel capacity
const SESSION_CHANNEL_CAPACITY: usize = 16;

/// Main client for the Lyra catalog and identity service.
///
/// The client handles authentication state and provides access to song,
/// playlist, and like operations.
///
/// # Example
///
/// ```ignore
/// use lyra_catalog::{CatalogClient, ServiceConfig};
/// use lyra_core::SongFilter;
///
/// // Create client
/// let config = ServiceConfig::new("https://catalog.example.com");
/// let client = CatalogClient::new(config)?;
///
/// // Sign in
/// let user = client.auth().sign_in("user@example.com", "password").await?;
/// println!("Signed in as {}", user.full_name);
///
/// // Fetch the newest songs
/// let songs = client.songs().fetch(SongFilter::Recent { limit: 20 }).await?;
/// println!("Found {} songs", songs.len());
/// ```
pub struct CatalogClient {
    http: Client,
    config: Arc<RwLock<ServiceConfig>>,
    current_user: Arc<RwLock<Option<User>>>,
    session_tx: broadcast::Sender<SessionEvent>,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let normalized_config = ServiceConfig {
            url,
            access_token: config.access_token,
        };

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("LyraPlayer/{} (Web)", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::Request)?;

        let (session_tx, _) = broadcast::channel(SESSION_CHANNEL_CAPACITY);

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(normalized_config)),
            current_user: Arc::new(RwLock::new(None)),
            session_tx,
        })
    }

    /// Get the service URL.
    pub async fn url(&self) -> String {
        self.config.read().await.url.clone()
    }

    /// Check if the client has an access token.
    pub async fn is_authenticated(&self) -> bool {
        self.config.read().await.access_token.is_some()
    }

    /// Get a songs client for catalog queries.
    pub fn songs(&self) -> SongsClient<'_> {
        SongsClient::new(self)
    }

    /// Get a playlists client for playlist operations.
    pub fn playlists(&self) -> PlaylistsClient<'_> {
        PlaylistsClient::new(self)
    }

    /// Get a likes client for like operations.
    pub fn likes(&self) -> LikesClient<'_> {
        LikesClient::new(self)
    }

    /// Get an auth client for identity operations.
    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(self)
    }

    /// Subscribe to sign-in/sign-out notifications.
    pub fn subscribe_sessions(&self) -> broadcast::Receiver<SessionEvent> {
        self.session_tx.subscribe()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Snapshot the base URL and access token for one request.
    pub(crate) async fn snapshot(&self) -> (String, Option<String>) {
        let config = self.config.read().await;
        (config.url.clone(), config.access_token.clone())
    }

    pub(crate) async fn store_session(&self, access_token: String, user: User) {
        self.config.write().await.access_token = Some(access_token);
        *self.current_user.write().await = Some(user.clone());
        let _ = self.session_tx.send(SessionEvent::SignedIn(user));
    }

    pub(crate) async fn clear_session(&self) {
        self.config.write().await.access_token = None;
        *self.current_user.write().await = None;
        let _ = self.session_tx.send(SessionEvent::SignedOut);
    }

    pub(crate) async fn cached_user(&self) -> Option<User> {
        self.current_user.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(CatalogClient::new(ServiceConfig::new("https://example.com")).is_ok());
        assert!(CatalogClient::new(ServiceConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(CatalogClient::new(ServiceConfig::new("")).is_err());
        assert!(CatalogClient::new(ServiceConfig::new("not-a-url")).is_err());
        assert!(CatalogClient::new(ServiceConfig::new("ftp://example.com")).is_err());
    }

    #[tokio::test]
    async fn test_url_normalization() {
        let client =
            CatalogClient::new(ServiceConfig::new("https://example.com/")).expect("valid url");

        // URL should have trailing slash removed
        assert_eq!(client.url().await, "https://example.com");
    }

    #[tokio::test]
    async fn test_session_subscription() {
        let client =
            CatalogClient::new(ServiceConfig::new("https://example.com")).expect("valid url");
        let mut sessions = client.subscribe_sessions();

        let user = User::new("user@example.com", "Test User");
        client.store_session("token".to_string(), user.clone()).await;
        assert!(client.is_authenticated().await);
        assert_eq!(
            sessions.try_recv().unwrap(),
            SessionEvent::SignedIn(user)
        );

        client.clear_session().await;
        assert!(!client.is_authenticated().await);
        assert_eq!(sessions.try_recv().unwrap(), SessionEvent::SignedOut);
    }
}
