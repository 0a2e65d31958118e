//! Platform-aware configuration paths for render-complete

use crate::core::constants::config_files::{APP_DIR, CONFIG_DIR_ENV, CONFIG_TOML};
use crate::core::errors::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Get the appropriate configuration directory for the current platform
pub fn config_dir() -> ConfigResult<PathBuf> {
    if let Ok(custom_dir) = env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(custom_dir));
    }

    dirs::config_dir()
        .map(|p| p.join(APP_DIR))
        .ok_or(ConfigError::NoConfigDir)
}

/// Default location of the configuration file
pub fn default_config_file() -> ConfigResult<PathBuf> {
    Ok(config_dir()?.join(CONFIG_TOML))
}
