//! Authcore - Session and credential lifecycle for web authentication
//!
//! This is the library interface for Authcore: password hashing and
//! verification, session-token issuance and teardown, password-reset
//! tokens, and the user-record store contract the flows run against.
//! The HTTP surface and the persistence engine belong to the caller.

pub mod auth;
pub mod config;
pub mod error;
pub mod store;

pub use auth::{AuthService, CredentialHasher, SessionDirectory, User};
pub use config::{AuthConfig, AuthStrategy};
pub use error::Error;
pub use store::{InMemoryUserStore, UserKey, UserStore, UserUpdate};
