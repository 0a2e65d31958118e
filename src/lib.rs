//! # render-complete
//!
//! Component discovery and snippet completion for server-rendered templates.
//!
//! The crate scans a project's component sources (by default
//! `app/components/**/*_component.rb`), extracts each component's class name and
//! initializer parameter list, and turns them into editor snippets offered when
//! a template line ends in a `render` call.
//!
//! ## Quick Start
//!
//! ```rust
//! use render_complete::{build_catalog, synthesize_snippet, SourceUnit};
//!
//! let units = vec![SourceUnit::new(
//!     "app/components/card_component.rb",
//!     "class CardComponent < ViewComponent::Base\n  def initialize(title:, count: 0)\n  end\nend",
//! )];
//!
//! let catalog = build_catalog(&units);
//! let snippets: Vec<String> = catalog.iter().map(synthesize_snippet).collect();
//! assert_eq!(snippets, vec!["CardComponent.new(title: ${1:value}, count: ${2:0})"]);
//! ```
//!
//! ## Module Overview
//!
//! - [`catalog`] - Component extraction from source text
//! - [`snippet`] - Snippet synthesis from component descriptors
//! - [`workspace`] - Source discovery and reading
//! - [`cache`] - Catalog caching and invalidation
//! - [`watch`] - Filesystem-driven invalidation
//! - [`completion`] - Render-call trigger detection and completion items
//! - [`config`] - Configuration loading and validation
//! - [`cli`] - Command-line interface

/// Catalog caching and invalidation
pub mod cache;
/// Component extraction from source text
pub mod catalog;
/// Command-line interface and argument parsing
pub mod cli;
/// Render-call trigger detection and completion items
pub mod completion;
/// Configuration loading and validation
pub mod config;
/// Core types, errors, and capability traits
pub mod core;
/// Snippet synthesis from component descriptors
pub mod snippet;
/// Filesystem-driven catalog invalidation
pub mod watch;
/// Component source discovery and reading
pub mod workspace;

pub use crate::core::*;
pub use cache::CatalogCache;
pub use catalog::{build_catalog, extract_descriptor, CatalogBuilder};
pub use completion::CompletionProvider;
pub use snippet::synthesize_snippet;
