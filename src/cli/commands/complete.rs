use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::cache::CatalogCache;
use crate::cli::args::CompleteArgs;
use crate::cli::commands::{utils, Command};
use crate::completion::CompletionProvider;
use crate::config::CompleterConfig;

pub struct CompleteCommand {
    args: CompleteArgs,
    config: CompleterConfig,
}

impl CompleteCommand {
    pub fn new(args: CompleteArgs, config: CompleterConfig) -> Self {
        Self { args, config }
    }
}

#[async_trait]
impl Command for CompleteCommand {
    async fn execute(&self) -> Result<()> {
        let provider = Arc::new(utils::workspace_provider(&self.config, &self.args.roots)?);
        let completions = CompletionProvider::new(Arc::new(CatalogCache::new(provider)))
            .with_languages(self.config.languages.clone())
            .with_sort_text(self.config.sort_text.clone());

        // Outside a render call the host expects an empty list, not an error
        let items = completions
            .provide(&self.args.language, &self.args.line)
            .await?
            .unwrap_or_default();

        println!("{}", serde_json::to_string_pretty(&items)?);
        Ok(())
    }
}
