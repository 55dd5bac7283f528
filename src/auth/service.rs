//! Authentication service orchestrating hasher, tokens, and store

use crate::auth::credentials::CredentialHasher;
use crate::auth::models::User;
use crate::auth::token;
use crate::error::{Error, Result};
use crate::store::{UserKey, UserStore, UserUpdate};

/// Registration, login, session, and password-reset flows over a [`UserStore`]
///
/// Generic over the store implementation so the engine carries no
/// dependency on any particular persistence backend. Expected absences
/// (unknown email on login, stale session token) come back as
/// `Ok(false)` / `Ok(None)`; only genuine precondition violations and
/// backend faults surface as errors.
pub struct AuthService<S: UserStore> {
    store: S,
    hasher: CredentialHasher,
}

impl<S: UserStore> AuthService<S> {
    /// Create a service with the default hashing cost
    pub fn new(store: S) -> Self {
        Self {
            store,
            hasher: CredentialHasher::new(),
        }
    }

    /// Create a service with an explicit hasher, e.g. from configuration
    pub fn with_hasher(store: S, hasher: CredentialHasher) -> Self {
        Self { store, hasher }
    }

    /// Register a new user
    ///
    /// Fails with [`Error::UserAlreadyExists`] when the email is taken.
    /// The pre-check here and the insert are only atomic when the store
    /// enforces uniqueness inside `add`, as the in-memory store does;
    /// against a store that cannot, two concurrent registrations for the
    /// same email may race.
    pub async fn register(&self, email: &str, password: &str) -> Result<User> {
        if self.store.find_by(UserKey::Email(email)).await?.is_some() {
            return Err(Error::UserAlreadyExists(email.to_string()));
        }

        let password_hash = self.hasher.hash(password)?;
        let user = self.store.add(email, &password_hash).await?;
        tracing::info!("Registered user '{}'", email);
        Ok(user)
    }

    /// Check login credentials
    ///
    /// Unknown emails and wrong passwords both return `Ok(false)`; an
    /// error here means the store itself failed.
    pub async fn verify_login(&self, email: &str, password: &str) -> Result<bool> {
        match self.store.find_by(UserKey::Email(email)).await? {
            Some(user) => {
                let valid = self.hasher.verify(&user.password_hash, password);
                if !valid {
                    tracing::warn!("Rejected login for '{}'", email);
                }
                Ok(valid)
            }
            None => Ok(false),
        }
    }

    /// Open a session for the user with the given email
    ///
    /// Returns `Ok(None)` when no such user exists; callers must treat
    /// that as "no session issued". A fresh token replaces any previous
    /// session, so each user holds at most one.
    pub async fn create_session(&self, email: &str) -> Result<Option<String>> {
        let Some(user) = self.store.find_by(UserKey::Email(email)).await? else {
            return Ok(None);
        };

        let session_id = token::generate();
        self.store
            .update(
                &user.id,
                UserUpdate {
                    session_id: Some(Some(session_id.clone())),
                    ..Default::default()
                },
            )
            .await?;
        tracing::info!("Opened session for '{}'", email);
        Ok(Some(session_id))
    }

    /// Resolve a session token to its user record
    ///
    /// A `None` token maps straight to `Ok(None)` without touching the
    /// store; a token no record carries resolves to `Ok(None)` as well.
    pub async fn resolve_session(&self, session_id: Option<&str>) -> Result<Option<User>> {
        match session_id {
            Some(session_id) => self.store.find_by(UserKey::SessionId(session_id)).await,
            None => Ok(None),
        }
    }

    /// Clear the session field on a user record
    ///
    /// A no-op for `None`. Clearing an already-clear session is fine, so
    /// the operation is idempotent; an unknown user id is a hard error
    /// from the store.
    pub async fn destroy_session(&self, user_id: Option<&str>) -> Result<()> {
        let Some(user_id) = user_id else {
            return Ok(());
        };

        self.store
            .update(
                user_id,
                UserUpdate {
                    session_id: Some(None),
                    ..Default::default()
                },
            )
            .await?;
        tracing::debug!("Destroyed session for user {}", user_id);
        Ok(())
    }

    /// Issue a password-reset token
    ///
    /// Unknown emails are rejected with the same opaque
    /// [`Error::ResetRejected`] as unknown tokens, so the reset flow
    /// cannot be used to probe which addresses are registered.
    pub async fn request_password_reset(&self, email: &str) -> Result<String> {
        let Some(user) = self.store.find_by(UserKey::Email(email)).await? else {
            tracing::warn!("Rejected password reset request");
            return Err(Error::ResetRejected);
        };

        let reset_token = token::generate();
        self.store
            .update(
                &user.id,
                UserUpdate {
                    reset_token: Some(Some(reset_token.clone())),
                    ..Default::default()
                },
            )
            .await?;
        tracing::debug!("Issued reset token for user {}", user.id);
        Ok(reset_token)
    }

    /// Consume a reset token and install a new password
    ///
    /// The new hash is written and the token cleared in a single update,
    /// so a consumed token can never match a second time.
    pub async fn complete_password_reset(&self, reset_token: &str, new_password: &str) -> Result<()> {
        let Some(user) = self
            .store
            .find_by(UserKey::ResetToken(reset_token))
            .await?
        else {
            tracing::warn!("Rejected password reset completion");
            return Err(Error::ResetRejected);
        };

        let password_hash = self.hasher.hash(new_password)?;
        self.store
            .update(
                &user.id,
                UserUpdate {
                    password_hash: Some(password_hash),
                    reset_token: Some(None),
                    ..Default::default()
                },
            )
            .await?;
        tracing::info!("Password reset completed for user {}", user.id);
        Ok(())
    }
}
