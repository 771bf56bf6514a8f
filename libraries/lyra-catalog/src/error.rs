//! Error types for the catalog client.

use thiserror::Error;

/// Errors that can occur when talking to the catalog/identity service.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service returned an error response
    #[error("Service error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Authentication required but no token available
    #[error("Authentication required")]
    AuthRequired,

    /// Authentication failed (invalid credentials or expired token)
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Invalid service URL
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse a service response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Service is offline or unreachable
    #[error("Service unreachable: {0}")]
    Unreachable(String),
}

/// Result type for catalog client operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

impl From<CatalogError> for lyra_core::LyraError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::Request(_) | CatalogError::Unreachable(_) => {
                lyra_core::LyraError::network(err.to_string())
            }
            CatalogError::AuthRequired => lyra_core::LyraError::NotSignedIn,
            _ => lyra_core::LyraError::catalog(err.to_string()),
        }
    }
}
