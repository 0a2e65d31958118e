//! Configuration loading for render-complete

pub mod paths;
pub mod validation;

pub use paths::{config_dir, default_config_file};
pub use validation::validate;

use crate::core::constants::{completion, discovery, languages};
use crate::core::errors::{ConfigError, ConfigResult};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Configuration actions for render-complete
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show the effective configuration
    Show,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompleterConfig {
    /// Glob selecting component sources, relative to each root
    pub component_glob: String,
    /// Template language ids that get render completions
    pub languages: Vec<String>,
    /// Sort key attached to every completion item
    pub sort_text: String,
    /// Workspace roots; empty means the current directory. Relative roots in
    /// a config file are resolved against that file's directory.
    pub roots: Vec<PathBuf>,
}

impl Default for CompleterConfig {
    fn default() -> Self {
        Self {
            component_glob: discovery::COMPONENT_GLOB.to_string(),
            languages: languages::ALL.iter().map(|l| l.to_string()).collect(),
            sort_text: completion::SORT_TEXT.to_string(),
            roots: Vec::new(),
        }
    }
}

impl CompleterConfig {
    /// Load and validate a configuration file
    pub async fn load(path: &Path) -> ConfigResult<Self> {
        debug!("Loading config from file: {}", path.display());

        let content = fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::ReadFailed {
                path: path.to_path_buf(),
                source,
            })?;

        let mut config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        validate(&config)?;

        if let Some(base) = path.parent() {
            config.roots = config
                .roots
                .into_iter()
                .map(|root| if root.is_relative() { base.join(root) } else { root })
                .collect();
        }

        info!("Loaded config from file: {}", path.display());
        Ok(config)
    }

    /// Load `explicit` if given, else the platform default file if it
    /// exists, else the built-in defaults
    pub async fn resolve(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path).await;
        }

        match default_config_file() {
            Ok(path) if path.is_file() => Self::load(&path).await,
            _ => {
                debug!("No config file found; using defaults");
                Ok(Self::default())
            }
        }
    }

    pub async fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| ConfigError::WriteFailed {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        fs::write(path, content)
            .await
            .map_err(|source| ConfigError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Saved config to file: {}", path.display());
        Ok(())
    }

    /// Roots to scan, with `fallback` when none are configured
    pub fn roots_or(&self, fallback: PathBuf) -> Vec<PathBuf> {
        if self.roots.is_empty() {
            vec![fallback]
        } else {
            self.roots.clone()
        }
    }
}
