//! Configuration validation for render-complete

use super::CompleterConfig;
use crate::core::errors::{ConfigError, ConfigResult};

/// Reject configurations that could never discover or offer a component
pub fn validate(config: &CompleterConfig) -> ConfigResult<()> {
    if config.component_glob.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "component_glob".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    if let Err(e) = glob::Pattern::new(&config.component_glob) {
        return Err(ConfigError::InvalidValue {
            field: "component_glob".to_string(),
            reason: e.to_string(),
        });
    }

    if config.component_glob.starts_with('/') {
        return Err(ConfigError::InvalidValue {
            field: "component_glob".to_string(),
            reason: "must be relative to a workspace root".to_string(),
        });
    }

    if config.languages.is_empty() || config.languages.iter().any(|l| l.trim().is_empty()) {
        return Err(ConfigError::InvalidValue {
            field: "languages".to_string(),
            reason: "must list at least one non-empty language id".to_string(),
        });
    }

    Ok(())
}
