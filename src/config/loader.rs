//! Configuration loading

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::AuthConfig;

/// Load and validate configuration from a TOML file
pub fn load_config_from_path(path: &Path) -> Result<AuthConfig> {
    let content = fs::read_to_string(path).map_err(|_| Error::ConfigNotFound)?;
    let config: AuthConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
