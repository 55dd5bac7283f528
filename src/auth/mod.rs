//! Authentication and session management

pub mod credentials;
pub mod directory;
pub mod models;
pub mod service;
pub mod token;

pub use credentials::CredentialHasher;
pub use directory::SessionDirectory;
pub use models::User;
pub use service::AuthService;
