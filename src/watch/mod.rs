//! Filesystem-driven catalog invalidation

pub mod component_watcher;

pub use component_watcher::{component_changes, ComponentWatcher};
