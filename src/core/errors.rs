/// Domain-specific error types for render-complete using thiserror
///
/// Parsing of component sources never fails; these errors cover the shell
/// around it: locating source files, watching them, and loading configuration.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while discovering or watching component sources
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid component glob '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("File watcher failed")]
    Watch(#[from] notify::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write configuration file {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse configuration file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize configuration")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Unable to determine the configuration directory for this platform")]
    NoConfigDir,
}

pub type CatalogResult<T> = Result<T, CatalogError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
