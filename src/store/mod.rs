//! User record store abstraction
//!
//! The persistence engine is an external collaborator. This module defines
//! the contract the authentication service drives, and ships an in-memory
//! reference implementation for deployments that need no durability.

pub mod memory;

pub use memory::InMemoryUserStore;

use std::future::Future;

use crate::auth::models::User;
use crate::error::Result;

/// Unique lookup key for [`UserStore::find_by`]
///
/// Email is unique by construction. Session identifiers and reset tokens
/// are 128-bit random values assumed unique; should a backend ever hold
/// duplicates, the first match wins.
#[derive(Debug, Clone, Copy)]
pub enum UserKey<'a> {
    Email(&'a str),
    SessionId(&'a str),
    ResetToken(&'a str),
}

/// Partial update of a user record
///
/// The outer `Option` selects whether a field changes at all; the inner
/// value is what it becomes, so nullable fields can be cleared explicitly.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub password_hash: Option<String>,
    pub session_id: Option<Option<String>>,
    pub reset_token: Option<Option<String>>,
}

/// Store contract for user records
///
/// Absence from `find_by` is `Ok(None)`, never an error; `Err` is reserved
/// for backend faults. Implementations should enforce email uniqueness
/// inside `add`. An `update` against an unknown id is a hard
/// [`Error::UserNotFound`](crate::error::Error::UserNotFound).
pub trait UserStore: Send + Sync {
    /// Look up a single record by a unique field
    fn find_by(&self, key: UserKey<'_>) -> impl Future<Output = Result<Option<User>>> + Send;

    /// Create a record from an email and an already-hashed password
    fn add(&self, email: &str, password_hash: &str) -> impl Future<Output = Result<User>> + Send;

    /// Apply a partial update to the record with the given id
    fn update(&self, id: &str, changes: UserUpdate) -> impl Future<Output = Result<()>> + Send;
}
