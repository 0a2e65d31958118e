//! Completion trigger detection and item construction

pub mod provider;

pub use provider::{completion_items, is_trigger, language_for_path, CompletionProvider};
