//! Error types for Authcore

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found")]
    ConfigNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("User '{0}' already exists")]
    UserAlreadyExists(String),

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("Password reset rejected")]
    ResetRejected,

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, Error>;
