//! Path resolution for the config file.

use std::path::PathBuf;

use crate::config::default_config_path;
use crate::constants::CONFIG_ENV;

/// Resolve the config file path, checking CRYPTONOTE_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}
