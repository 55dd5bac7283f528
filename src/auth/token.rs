//! Opaque identifier generation

use uuid::Uuid;

/// Generate a globally-unique opaque token
///
/// Session identifiers and password-reset tokens are v4 UUIDs in their
/// textual form: 128 bits of randomness, no shared counter, safe to call
/// concurrently. Callers must not parse or construct these values.
pub fn generate() -> String {
    Uuid::new_v4().to_string()
}
