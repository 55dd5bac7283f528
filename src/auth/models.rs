//! User record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record as persisted by a `UserStore`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned unique identifier
    pub id: String,
    /// Email address, unique across the store
    pub email: String,
    /// Salted bcrypt hash of the password, never the plaintext
    pub password_hash: String,
    /// Currently active session identifier, if any
    pub session_id: Option<String>,
    /// Outstanding password-reset token, if any
    pub reset_token: Option<String>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a record with no active session or reset token
    pub fn new(id: String, email: String, password_hash: String) -> Self {
        Self {
            id,
            email,
            password_hash,
            session_id: None,
            reset_token: None,
            created_at: Utc::now(),
        }
    }
}
