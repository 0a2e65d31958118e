use anyhow::Result;
use async_trait::async_trait;

pub mod complete;
pub mod config;
pub mod list;
pub mod snippet;
pub mod watch;

/// Trait for CLI command implementations
#[async_trait]
pub trait Command {
    /// Execute the command with the given arguments
    async fn execute(&self) -> Result<()>;
}

/// Common utilities for command implementations
pub mod utils {
    use crate::cli::args::ListFormat;
    use crate::config::CompleterConfig;
    use crate::core::Catalog;
    use crate::snippet::synthesize_snippet;
    use crate::workspace::FsSourceProvider;
    use anyhow::{Context, Result};
    use std::path::PathBuf;

    /// Build the filesystem provider from CLI roots, falling back to configured
    /// roots and then the current directory
    pub fn workspace_provider(
        config: &CompleterConfig,
        cli_roots: &[PathBuf],
    ) -> Result<FsSourceProvider> {
        let roots = if cli_roots.is_empty() {
            let cwd = std::env::current_dir().context("Failed to determine current directory")?;
            config.roots_or(cwd)
        } else {
            cli_roots.to_vec()
        };

        let roots = roots
            .into_iter()
            .map(|root| {
                root.canonicalize()
                    .with_context(|| format!("Workspace root not found: {}", root.display()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(FsSourceProvider::new(roots).with_glob(config.component_glob.clone()))
    }

    /// Render a catalog for terminal output
    pub fn format_catalog(catalog: &Catalog, format: ListFormat) -> Result<String> {
        match format {
            ListFormat::Json => Ok(serde_json::to_string_pretty(catalog)?),
            ListFormat::Table => {
                if catalog.is_empty() {
                    return Ok("No components found.".to_string());
                }
                let mut rows: Vec<(String, String)> = catalog
                    .iter()
                    .map(|d| (d.name.clone(), synthesize_snippet(d)))
                    .collect();
                rows.sort();

                let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
                Ok(rows
                    .iter()
                    .map(|(name, snippet)| format!("{name:<width$}  {snippet}"))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
    }

}
