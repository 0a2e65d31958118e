use anyhow::{bail, Result};
use async_trait::async_trait;
use std::path::PathBuf;

use crate::cli::commands::Command;
use crate::config::{default_config_file, CompleterConfig, ConfigAction};

pub struct ConfigCommand {
    action: ConfigAction,
    path: Option<PathBuf>,
}

impl ConfigCommand {
    pub fn new(action: ConfigAction, path: Option<PathBuf>) -> Self {
        Self { action, path }
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Ok(default_config_file()?),
        }
    }
}

#[async_trait]
impl Command for ConfigCommand {
    async fn execute(&self) -> Result<()> {
        match &self.action {
            ConfigAction::Init { force } => {
                let config_path = self.config_path()?;
                if config_path.exists() && !force {
                    bail!(
                        "Configuration already exists at {} (use --force to overwrite)",
                        config_path.display()
                    );
                }
                CompleterConfig::default().save(&config_path).await?;
                println!("Configuration initialized at {}", config_path.display());
            }

            ConfigAction::Show => {
                let config = CompleterConfig::resolve(self.path.as_deref()).await?;
                print!("{}", toml::to_string_pretty(&config)?);
            }
        }

        Ok(())
    }
}
