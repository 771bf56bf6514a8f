/// User domain type
use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Email address
    pub email: String,

    /// Display name
    pub full_name: String,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(email: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id: UserId::generate(),
            email: email.into(),
            full_name: full_name.into(),
            created_at: Utc::now(),
        }
    }
}
