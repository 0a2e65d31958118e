//! In-memory component source provider

use crate::core::errors::CatalogResult;
use crate::core::SourceProvider;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::warn;

/// Map-backed provider for embedding hosts that already hold file text
#[derive(Debug, Default)]
pub struct InMemorySourceProvider {
    files: RwLock<BTreeMap<PathBuf, String>>,
}

impl InMemorySourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files<I, P, S>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, S)>,
        P: Into<PathBuf>,
        S: Into<String>,
    {
        let provider = Self::new();
        for (path, text) in files {
            provider.insert(path, text);
        }
        provider
    }

    /// Add or replace a source
    pub fn insert(&self, path: impl Into<PathBuf>, text: impl Into<String>) {
        let path = path.into();
        match self.files.write() {
            Ok(mut files) => {
                files.insert(path, text.into());
            }
            Err(_) => warn!("Source map lock poisoned; dropping {}", path.display()),
        }
    }

    pub fn remove(&self, path: &Path) -> Option<String> {
        match self.files.write() {
            Ok(mut files) => files.remove(path),
            Err(_) => {
                warn!("Source map lock poisoned; cannot remove {}", path.display());
                None
            }
        }
    }
}

#[async_trait]
impl SourceProvider for InMemorySourceProvider {
    async fn discover(&self) -> CatalogResult<Vec<PathBuf>> {
        Ok(self
            .files
            .read()
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default())
    }

    async fn read(&self, path: &Path) -> io::Result<String> {
        let files = self
            .files
            .read()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "source map lock poisoned"))?;
        files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no source for {}", path.display()),
            )
        })
    }

    fn provider_type(&self) -> &'static str {
        "memory"
    }
}
