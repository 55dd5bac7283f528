//! Configuration schema definitions

use serde::{Deserialize, Serialize};

use crate::auth::{CredentialHasher, SessionDirectory};
use crate::error::{Error, Result};

/// Authentication strategy, resolved once at startup
///
/// The consumer names a variant in its config file and wires the matching
/// machinery at process start; there is no runtime lookup by string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthStrategy {
    /// No authentication: every request passes, nothing is tracked
    #[default]
    NoAuth,
    /// Credentials presented on every request; no session state
    BasicAuth,
    /// Opaque session tokens held in memory
    SessionAuth,
    /// In-memory sessions that expire after `session_ttl_secs`
    SessionWithExpiry,
    /// Sessions persisted on the user record in a `UserStore`
    SessionWithStore,
}

impl AuthStrategy {
    /// Whether this strategy keeps any session state at all
    pub fn is_stateful(&self) -> bool {
        matches!(
            self,
            AuthStrategy::SessionAuth
                | AuthStrategy::SessionWithExpiry
                | AuthStrategy::SessionWithStore
        )
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Which strategy the consumer wires at startup
    #[serde(default)]
    pub strategy: AuthStrategy,

    /// Bcrypt cost factor for password hashing
    #[serde(default = "default_hash_cost")]
    pub hash_cost: u32,

    /// Session lifetime in seconds, used by `session_with_expiry`
    #[serde(default)]
    pub session_ttl_secs: Option<u64>,

    /// Cookie name the consuming HTTP layer stores session tokens under
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
}

fn default_hash_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

fn default_session_cookie() -> String {
    "_authcore_session".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            strategy: AuthStrategy::default(),
            hash_cost: default_hash_cost(),
            session_ttl_secs: None,
            session_cookie: default_session_cookie(),
        }
    }
}

impl AuthConfig {
    /// Check that the configuration can actually be used
    ///
    /// Bcrypt only accepts costs in 4..=31, and `session_with_expiry`
    /// needs a TTL to expire against.
    pub fn validate(&self) -> Result<()> {
        if !(4..=31).contains(&self.hash_cost) {
            return Err(Error::Config(format!(
                "hash_cost {} is outside bcrypt's accepted range 4..=31",
                self.hash_cost
            )));
        }
        if self.strategy == AuthStrategy::SessionWithExpiry && self.session_ttl_secs.is_none() {
            return Err(Error::Config(
                "session_with_expiry requires session_ttl_secs".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the credential hasher configured here
    pub fn hasher(&self) -> CredentialHasher {
        CredentialHasher::with_cost(self.hash_cost)
    }

    /// Build the session directory variant the strategy calls for
    ///
    /// `session_with_expiry` gets a TTL-tracking directory; every other
    /// strategy gets the plain one.
    pub fn directory(&self) -> SessionDirectory {
        match (self.strategy, self.session_ttl_secs) {
            (AuthStrategy::SessionWithExpiry, Some(secs)) => {
                SessionDirectory::with_ttl(chrono::Duration::seconds(secs as i64))
            }
            _ => SessionDirectory::new(),
        }
    }
}
