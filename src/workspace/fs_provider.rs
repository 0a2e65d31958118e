//! Filesystem-backed component source provider

use crate::core::constants::discovery::COMPONENT_GLOB;
use crate::core::errors::{CatalogError, CatalogResult};
use crate::core::SourceProvider;
use async_trait::async_trait;
use glob::{MatchOptions, Pattern};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Match options shared by discovery and change filtering
pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// One workspace root with its compiled component pattern
#[derive(Debug, Clone)]
struct RootScope {
    root: PathBuf,
    pattern: Option<Pattern>,
    component_dir: PathBuf,
}

/// Reads component sources from one or more workspace roots
#[derive(Debug, Clone)]
pub struct FsSourceProvider {
    roots: Vec<PathBuf>,
    component_glob: String,
    scopes: Vec<RootScope>,
}

impl FsSourceProvider {
    /// Provider over `roots` with the default component glob
    pub fn new(roots: Vec<PathBuf>) -> Self {
        let mut provider = Self {
            roots,
            component_glob: COMPONENT_GLOB.to_string(),
            scopes: Vec::new(),
        };
        provider.compile_scopes();
        provider
    }

    pub fn with_glob(mut self, component_glob: impl Into<String>) -> Self {
        self.component_glob = component_glob.into();
        self.compile_scopes();
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn component_glob(&self) -> &str {
        &self.component_glob
    }

    fn compile_scopes(&mut self) {
        let prefix = literal_prefix(&self.component_glob);
        self.scopes = self
            .roots
            .iter()
            .map(|root| RootScope {
                root: root.clone(),
                pattern: self.root_pattern(root).ok(),
                component_dir: root.join(&prefix),
            })
            .collect();
    }

    /// Compile the glob for one root, anchored at that root. The root itself
    /// is matched literally.
    pub fn root_pattern(&self, root: &Path) -> CatalogResult<Pattern> {
        let escaped = Pattern::escape(&root.to_string_lossy());
        let pattern = Path::new(&escaped)
            .join(&self.component_glob)
            .to_string_lossy()
            .into_owned();
        Pattern::new(&pattern).map_err(|source| CatalogError::Pattern { pattern, source })
    }

    /// Whether `path` is a component source under any root
    pub fn matches(&self, path: &Path) -> bool {
        self.scopes.iter().any(|scope| {
            scope
                .pattern
                .as_ref()
                .map_or(false, |p| p.matches_path_with(path, MATCH_OPTIONS))
        })
    }

    /// Whether moving or deleting `path` can take component sources with it:
    /// it lies inside the directory the glob starts from, or is an ancestor
    /// of that directory within the root.
    pub fn touches_component_tree(&self, path: &Path) -> bool {
        self.scopes.iter().any(|scope| {
            path.starts_with(&scope.component_dir)
                || (path.starts_with(&scope.root) && scope.component_dir.starts_with(path))
        })
    }

    fn discover_in_root(&self, scope: &RootScope) -> CatalogResult<Vec<PathBuf>> {
        let pattern = match &scope.pattern {
            Some(pattern) => pattern.clone(),
            None => self.root_pattern(&scope.root)?,
        };
        let entries = glob::glob_with(pattern.as_str(), MATCH_OPTIONS).map_err(|source| {
            CatalogError::Pattern {
                pattern: pattern.as_str().to_string(),
                source,
            }
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => paths.push(path),
                Ok(_) => {}
                Err(e) => warn!("Skipping unreadable path during discovery: {}", e),
            }
        }
        Ok(paths)
    }
}

/// Leading glob components that contain no wildcards, e.g. `app/components`
/// for `app/components/**/*_component.rb`
fn literal_prefix(glob: &str) -> PathBuf {
    glob.split('/')
        .take_while(|part| !part.contains(|c: char| matches!(c, '*' | '?' | '[' | '{')))
        .collect()
}

#[async_trait]
impl SourceProvider for FsSourceProvider {
    async fn discover(&self) -> CatalogResult<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for scope in &self.scopes {
            if !scope.root.is_dir() {
                warn!("Workspace root is not a directory: {}", scope.root.display());
                continue;
            }
            let found = self.discover_in_root(scope)?;
            debug!("Found {} component sources under {}", found.len(), scope.root.display());
            paths.extend(found);
        }
        paths.sort();
        paths.dedup();
        Ok(paths)
    }

    async fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path).await
    }

    fn provider_type(&self) -> &'static str {
        "filesystem"
    }
}
