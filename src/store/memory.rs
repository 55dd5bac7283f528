//! In-memory user record store

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{UserKey, UserStore, UserUpdate};
use crate::auth::models::User;
use crate::auth::token;
use crate::error::{Error, Result};

/// Reference [`UserStore`] backed by a shared in-memory map
///
/// Email uniqueness is enforced atomically inside `add` under the write
/// lock, so concurrent registrations for the same address cannot both
/// succeed. Records do not survive process restart.
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored records
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryUserStore {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
        }
    }
}

impl UserStore for InMemoryUserStore {
    async fn find_by(&self, key: UserKey<'_>) -> Result<Option<User>> {
        let users = self.users.read().await;
        let found = users.values().find(|user| match key {
            UserKey::Email(email) => user.email == email,
            UserKey::SessionId(session_id) => user.session_id.as_deref() == Some(session_id),
            UserKey::ResetToken(reset_token) => user.reset_token.as_deref() == Some(reset_token),
        });
        Ok(found.cloned())
    }

    async fn add(&self, email: &str, password_hash: &str) -> Result<User> {
        let mut users = self.users.write().await;
        if users.values().any(|user| user.email == email) {
            return Err(Error::UserAlreadyExists(email.to_string()));
        }

        let user = User::new(
            token::generate(),
            email.to_string(),
            password_hash.to_string(),
        );
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update(&self, id: &str, changes: UserUpdate) -> Result<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(id)
            .ok_or_else(|| Error::UserNotFound(id.to_string()))?;

        if let Some(password_hash) = changes.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(session_id) = changes.session_id {
            user.session_id = session_id;
        }
        if let Some(reset_token) = changes.reset_token {
            user.reset_token = reset_token;
        }
        Ok(())
    }
}
