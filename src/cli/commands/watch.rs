use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::warn;

use crate::cache::CatalogCache;
use crate::cli::args::WatchArgs;
use crate::cli::commands::{utils, Command};
use crate::config::CompleterConfig;
use crate::watch::ComponentWatcher;

pub struct WatchCommand {
    args: WatchArgs,
    config: CompleterConfig,
}

impl WatchCommand {
    pub fn new(args: WatchArgs, config: CompleterConfig) -> Self {
        Self { args, config }
    }
}

#[async_trait]
impl Command for WatchCommand {
    async fn execute(&self) -> Result<()> {
        let provider = Arc::new(utils::workspace_provider(&self.config, &self.args.roots)?);
        let cache = Arc::new(CatalogCache::new(Arc::clone(&provider)));
        let watcher = ComponentWatcher::start(provider, Arc::clone(&cache))?;
        let mut changes = watcher.subscribe();

        eprintln!("Watching for component changes (Ctrl-C to stop)...");
        let mut last_output = String::new();
        self.print_if_changed(&cache, &mut last_output).await?;

        loop {
            tokio::select! {
                change = changes.recv() => match change {
                    Ok(_) | Err(RecvError::Lagged(_)) => {
                        if let Err(e) = self.print_if_changed(&cache, &mut last_output).await {
                            warn!("Catalog rebuild failed: {}", e);
                        }
                    }
                    Err(RecvError::Closed) => break,
                },
                _ = tokio::signal::ctrl_c() => break,
            }
        }

        watcher.dispose().await;
        Ok(())
    }
}

impl WatchCommand {
    async fn print_if_changed(
        &self,
        cache: &CatalogCache<crate::workspace::FsSourceProvider>,
        last_output: &mut String,
    ) -> Result<()> {
        let catalog = cache.get_or_build().await?;
        let output = utils::format_catalog(&catalog, self.args.format)?;
        if output != *last_output {
            println!("{output}");
            *last_output = output;
        }
        Ok(())
    }
}
