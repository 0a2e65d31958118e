//! Component catalog construction from raw source text

use super::patterns::ComponentPatterns;
use crate::core::{Catalog, ComponentDescriptor, SourceUnit};
use rayon::prelude::*;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Builds catalogs from source text using one pattern pair
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    patterns: Option<ComponentPatterns>,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBuilder {
    /// Builder using the built-in component patterns
    pub fn new() -> Self {
        Self {
            patterns: ComponentPatterns::builtin().cloned(),
        }
    }

    pub fn with_patterns(patterns: ComponentPatterns) -> Self {
        Self {
            patterns: Some(patterns),
        }
    }

    /// Extract the descriptor for one source blob, if it declares a component
    pub fn extract(&self, text: &str) -> Option<ComponentDescriptor> {
        let patterns = self.patterns.as_ref()?;
        let name = patterns.match_name(text)?;

        let args = patterns
            .match_args(text)
            .filter(|raw| !raw.trim().is_empty())
            .map(str::to_string);

        Some(ComponentDescriptor::new(name, args))
    }

    /// Build a catalog from already-read source units
    pub fn build(&self, units: &[SourceUnit]) -> Catalog {
        units
            .par_iter()
            .filter_map(|unit| {
                let descriptor = self.extract(&unit.text);
                if descriptor.is_none() {
                    debug!("No component declaration in {}", unit.id.display());
                }
                descriptor
            })
            .collect::<Vec<_>>()
            .into()
    }

    /// Build a catalog from read attempts; failed reads are skipped
    pub fn build_from_results(&self, results: Vec<(PathBuf, io::Result<String>)>) -> Catalog {
        let units: Vec<SourceUnit> = results
            .into_iter()
            .filter_map(|(path, result)| match result {
                Ok(text) => Some(SourceUnit::new(path, text)),
                Err(e) => {
                    warn!("Skipping unreadable component source {}: {}", path.display(), e);
                    None
                }
            })
            .collect();

        self.build(&units)
    }
}

/// Extract the descriptor for one source blob with the built-in patterns
pub fn extract_descriptor(text: &str) -> Option<ComponentDescriptor> {
    CatalogBuilder::new().extract(text)
}

/// Build a catalog from source units with the built-in patterns
pub fn build_catalog(units: &[SourceUnit]) -> Catalog {
    CatalogBuilder::new().build(units)
}
