//! In-memory session directory

use crate::auth::token;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A directory entry mapping a session token to its user
#[derive(Debug, Clone)]
struct SessionEntry {
    user_id: String,
    created_at: DateTime<Utc>,
}

/// Non-persistent session tracking
///
/// Maps opaque session tokens to user identifiers where no durable store
/// is wired in. Unlike the store-backed service, a user may hold any
/// number of concurrent sessions here, and nothing survives a process
/// restart. Sessions only expire when a TTL is configured via
/// [`SessionDirectory::with_ttl`].
pub struct SessionDirectory {
    sessions: Arc<RwLock<HashMap<String, SessionEntry>>>,
    ttl: Option<Duration>,
}

impl SessionDirectory {
    /// Create a directory whose sessions never expire
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: None,
        }
    }

    /// Create a directory whose sessions expire after `ttl`
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: Some(ttl),
        }
    }

    /// Open a session for a user and return its token
    pub async fn open(&self, user_id: &str) -> String {
        let session_id = token::generate();
        let entry = SessionEntry {
            user_id: user_id.to_string(),
            created_at: Utc::now(),
        };
        self.sessions
            .write()
            .await
            .insert(session_id.clone(), entry);
        tracing::debug!("Opened session for user {}", user_id);
        session_id
    }

    /// Resolve a session token to its user identifier
    ///
    /// Expired entries are removed on the way out and report as absent.
    pub async fn resolve(&self, session_id: &str) -> Option<String> {
        let mut sessions = self.sessions.write().await;
        if let Some(entry) = sessions.get(session_id) {
            if self.is_expired(entry) {
                sessions.remove(session_id);
                return None;
            }
            return Some(entry.user_id.clone());
        }
        None
    }

    /// Close a session, reporting whether a mapping was removed
    pub async fn close(&self, session_id: &str) -> bool {
        let removed = self.sessions.write().await.remove(session_id).is_some();
        if removed {
            tracing::debug!("Closed session");
        }
        removed
    }

    /// Drop every expired session
    pub async fn cleanup_expired(&self) {
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, entry| !self.is_expired(entry));
    }

    /// Number of open sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn is_expired(&self, entry: &SessionEntry) -> bool {
        match self.ttl {
            Some(ttl) => Utc::now().signed_duration_since(entry.created_at) > ttl,
            None => false,
        }
    }
}

impl Default for SessionDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SessionDirectory {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            ttl: self.ttl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_and_resolve() {
        let directory = SessionDirectory::new();
        let session_id = directory.open("user-1").await;

        assert!(!session_id.is_empty());
        assert_eq!(directory.resolve(&session_id).await.as_deref(), Some("user-1"));
    }

    #[tokio::test]
    async fn test_resolve_unknown_token() {
        let directory = SessionDirectory::new();
        assert!(directory.resolve("no-such-session").await.is_none());
    }

    #[tokio::test]
    async fn test_close_reports_removal() {
        let directory = SessionDirectory::new();
        let session_id = directory.open("user-1").await;

        assert!(directory.close(&session_id).await);
        assert!(directory.resolve(&session_id).await.is_none());
        // Second close finds nothing to remove
        assert!(!directory.close(&session_id).await);
    }

    #[tokio::test]
    async fn test_multiple_sessions_per_user() {
        let directory = SessionDirectory::new();
        let first = directory.open("user-1").await;
        let second = directory.open("user-1").await;

        assert_ne!(first, second);
        assert_eq!(directory.resolve(&first).await.as_deref(), Some("user-1"));
        assert_eq!(directory.resolve(&second).await.as_deref(), Some("user-1"));
        assert_eq!(directory.session_count().await, 2);
    }

    #[tokio::test]
    async fn test_session_expiration() {
        let directory = SessionDirectory::with_ttl(Duration::minutes(30));
        let session_id = directory.open("user-1").await;

        // Backdate the entry past the TTL
        {
            let mut sessions = directory.sessions.write().await;
            if let Some(entry) = sessions.get_mut(&session_id) {
                entry.created_at = Utc::now() - Duration::minutes(31);
            }
        }

        assert!(directory.resolve(&session_id).await.is_none());
        assert_eq!(directory.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_cleanup_expired() {
        let directory = SessionDirectory::with_ttl(Duration::minutes(30));
        let stale = directory.open("user-1").await;
        let fresh = directory.open("user-2").await;

        {
            let mut sessions = directory.sessions.write().await;
            if let Some(entry) = sessions.get_mut(&stale) {
                entry.created_at = Utc::now() - Duration::minutes(31);
            }
        }

        directory.cleanup_expired().await;
        assert_eq!(directory.session_count().await, 1);
        assert_eq!(directory.resolve(&fresh).await.as_deref(), Some("user-2"));
    }

    #[tokio::test]
    async fn test_without_ttl_sessions_never_expire() {
        let directory = SessionDirectory::new();
        let session_id = directory.open("user-1").await;

        {
            let mut sessions = directory.sessions.write().await;
            if let Some(entry) = sessions.get_mut(&session_id) {
                entry.created_at = Utc::now() - Duration::days(365);
            }
        }

        directory.cleanup_expired().await;
        assert_eq!(directory.resolve(&session_id).await.as_deref(), Some("user-1"));
    }

    #[tokio::test]
    async fn test_clone_shares_sessions() {
        let first = SessionDirectory::new();
        let second = first.clone();

        let session_id = first.open("user-1").await;
        assert_eq!(second.resolve(&session_id).await.as_deref(), Some("user-1"));
    }
}
