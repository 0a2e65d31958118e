pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ListFormat};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::CompleterConfig;
use args::{CompleteArgs, ListArgs, SnippetArgs, WatchArgs};
use commands::complete::CompleteCommand;
use commands::config::ConfigCommand;
use commands::list::ListCommand;
use commands::snippet::SnippetCommand;
use commands::watch::WatchCommand;
use commands::Command;

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("render_complete={log_level}")));

    // Logs go to stderr so stdout stays machine-readable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Config and snippet commands must work even when the config file is broken
    let config = match &cli.command {
        Commands::Config { .. } | Commands::Snippet { .. } => CompleterConfig::default(),
        _ => CompleterConfig::resolve(cli.config.as_deref()).await?,
    };

    let command: Box<dyn Command + Send + Sync> = match cli.command {
        Commands::List { root, format } => Box::new(ListCommand::new(
            ListArgs {
                roots: root,
                format,
            },
            config,
        )),
        Commands::Complete {
            line,
            language,
            root,
        } => Box::new(CompleteCommand::new(
            CompleteArgs {
                line,
                language,
                roots: root,
            },
            config,
        )),
        Commands::Snippet { name, args } => Box::new(SnippetCommand::new(SnippetArgs { name, args })),
        Commands::Watch { root, format } => Box::new(WatchCommand::new(
            WatchArgs {
                roots: root,
                format,
            },
            config,
        )),
        Commands::Config { action } => Box::new(ConfigCommand::new(action, cli.config)),
    };

    command.execute().await
}
