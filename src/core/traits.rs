use crate::core::errors::CatalogResult;
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};

/// Capability to locate component sources and produce their text
#[async_trait]
pub trait SourceProvider: Send + Sync {
    /// List the identifiers of every candidate component source
    async fn discover(&self) -> CatalogResult<Vec<PathBuf>>;

    /// Read the full text of one source
    async fn read(&self, path: &Path) -> io::Result<String>;

    /// Get the provider type name for debugging
    fn provider_type(&self) -> &'static str;
}
