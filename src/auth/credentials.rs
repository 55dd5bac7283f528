//! Password hashing and verification

use crate::error::{Error, Result};

/// Salted one-way password hashing with a tunable cost factor
#[derive(Debug, Clone, Copy)]
pub struct CredentialHasher {
    cost: u32,
}

impl CredentialHasher {
    /// Create a hasher using the default bcrypt cost
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit cost factor
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password with a fresh random salt
    ///
    /// The returned string embeds the salt and cost, so verification
    /// needs no side channel.
    pub fn hash(&self, plaintext: &str) -> Result<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| Error::Hash(e.to_string()))
    }

    /// Verify a plaintext password against a stored hash
    ///
    /// Comparison is constant-time. Malformed hashes fail closed: any
    /// value that cannot be parsed counts as a mismatch.
    pub fn verify(&self, hash: &str, plaintext: &str) -> bool {
        bcrypt::verify(plaintext, hash).unwrap_or(false)
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}
