//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::RouterConfig;
use crate::config::validation::validate_config;
use crate::error::ConfigurationError;

/// Load and validate a configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigurationError> {
    let content = fs::read_to_string(path)?;
    let config: RouterConfig = toml::from_str(&content)?;

    validate_config(&config)?;

    Ok(config)
}
