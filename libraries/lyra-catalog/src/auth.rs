//! Identity operations for the catalog service.

use crate::client::CatalogClient;
use crate::error::{CatalogError, Result};
use crate::types::{SignInRequest, SignInResponse};
use lyra_core::types::User;
use tracing::{debug, info, warn};

/// Auth client for the catalog service.
pub struct AuthClient<'a> {
    client: &'a CatalogClient,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(client: &'a CatalogClient) -> Self {
        Self { client }
    }

    /// Sign in with email and password.
    ///
    /// On success the access token is stored for subsequent requests and
    /// subscribers receive a `SignedIn` notification.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        let (base_url, _) = self.client.snapshot().await;
        let url = format!("{}/api/auth/sign-in", base_url);

        debug!(url = %url, email = %email, "Attempting sign-in");

        let request = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .http()
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    CatalogError::Unreachable(e.to_string())
                } else {
                    CatalogError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let sign_in: SignInResponse = response.json().await.map_err(|e| {
                CatalogError::Parse(format!("Failed to parse sign-in response: {}", e))
            })?;

            info!(
                email = %sign_in.user.email,
                user_id = %sign_in.user.id,
                "Sign-in successful"
            );

            self.client
                .store_session(sign_in.access_token, sign_in.user.clone())
                .await;

            Ok(sign_in.user)
        } else if status.as_u16() == 401 {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Sign-in failed: invalid credentials");
            Err(CatalogError::AuthFailed(
                "Invalid email or password".to_string(),
            ))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CatalogError::Server {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Sign out the current user.
    ///
    /// Clears the stored session and notifies subscribers with `SignedOut`.
    pub async fn sign_out(&self) {
        self.client.clear_session().await;
        info!("Signed out");
    }

    /// The currently signed-in user, or `None`.
    ///
    /// Served from the cached session when available; falls back to the
    /// service when a token exists but no user is cached (e.g. a restored
    /// session).
    pub async fn current_user(&self) -> Result<Option<User>> {
        if let Some(user) = self.client.cached_user().await {
            return Ok(Some(user));
        }

        let (base_url, token) = self.client.snapshot().await;
        let Some(token) = token else {
            return Ok(None);
        };

        let url = format!("{}/api/auth/me", base_url);
        debug!(url = %url, "Fetching current user");

        let response = self
            .client
            .http()
            .get(&url)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let user: User = response.json().await.map_err(|e| {
                CatalogError::Parse(format!("Failed to parse user response: {}", e))
            })?;

            Ok(Some(user))
        } else if status.as_u16() == 401 {
            // Token expired; treat as signed out
            Ok(None)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CatalogError::Server {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
