use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::cache::CatalogCache;
use crate::cli::args::ListArgs;
use crate::cli::commands::{utils, Command};
use crate::config::CompleterConfig;

pub struct ListCommand {
    args: ListArgs,
    config: CompleterConfig,
}

impl ListCommand {
    pub fn new(args: ListArgs, config: CompleterConfig) -> Self {
        Self { args, config }
    }
}

#[async_trait]
impl Command for ListCommand {
    async fn execute(&self) -> Result<()> {
        let provider = Arc::new(utils::workspace_provider(&self.config, &self.args.roots)?);
        let cache = CatalogCache::new(provider);

        let catalog = cache.get_or_build().await?;
        println!("{}", utils::format_catalog(&catalog, self.args.format)?);
        Ok(())
    }
}
