use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ConfigAction;

/// Main CLI structure for render-complete.
///
/// Scans a project's component sources and produces the snippets an editor
/// offers after a `render` call in a template.
///
/// # Examples
///
/// ```bash
/// # List every component under the current project
/// render-complete list
///
/// # Completions for a template line ending in a render call
/// render-complete complete --line '<%= render ' --language erb
///
/// # Keep the catalog fresh while files change
/// render-complete watch --root ~/src/shop
/// ```
#[derive(Parser)]
#[command(name = "render-complete")]
#[command(about = "Component discovery and render-call snippet completion")]
#[command(version)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List discovered components
    List {
        /// Workspace roots to scan (default: configured roots or current directory)
        #[arg(short, long)]
        root: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: ListFormat,
    },

    /// Print completion items for a template line
    Complete {
        /// Text of the active line up to the cursor
        #[arg(short, long)]
        line: String,

        /// Template language id
        #[arg(long, default_value = "erb")]
        language: String,

        /// Workspace roots to scan
        #[arg(short, long)]
        root: Vec<PathBuf>,
    },

    /// Print the snippet for one component signature
    Snippet {
        /// Component name
        name: String,

        /// Raw initializer parameter list, e.g. "title:, count: 0"
        #[arg(short, long)]
        args: Option<String>,
    },

    /// Watch component sources and print the catalog after each change
    Watch {
        /// Workspace roots to watch
        #[arg(short, long)]
        root: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: ListFormat,
    },

    /// Manage configuration
    Config {
        /// Configuration action to perform
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Output formats for catalog listings
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Aligned name / snippet table
    Table,
    /// JSON array of descriptors
    Json,
}

// Argument structures for command handlers
pub struct ListArgs {
    pub roots: Vec<PathBuf>,
    pub format: ListFormat,
}

pub struct CompleteArgs {
    pub line: String,
    pub language: String,
    pub roots: Vec<PathBuf>,
}

pub struct SnippetArgs {
    pub name: String,
    pub args: Option<String>,
}

pub struct WatchArgs {
    pub roots: Vec<PathBuf>,
    pub format: ListFormat,
}
