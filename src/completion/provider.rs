//! Render-call completion provider

use crate::cache::CatalogCache;
use crate::core::constants::{completion, languages};
use crate::core::{Catalog, CatalogResult, CompletionItem, CompletionKind, SourceProvider};
use crate::snippet::synthesize_snippet;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

static TRIGGER: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(completion::TRIGGER_PATTERN).ok());

/// Whether the text before the cursor is a render call awaiting a component
pub fn is_trigger(line_prefix: &str) -> bool {
    TRIGGER
        .as_ref()
        .map(|re| re.is_match(line_prefix))
        .unwrap_or(false)
}

/// Template language id for a file, from its extension
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;
    languages::ALL
        .iter()
        .copied()
        .find(|lang| lang.eq_ignore_ascii_case(ext))
}

/// Turn every catalog entry into an insertable completion
pub fn completion_items(catalog: &Catalog, sort_text: &str) -> Vec<CompletionItem> {
    catalog
        .iter()
        .map(|descriptor| CompletionItem {
            label: descriptor.name.clone(),
            kind: CompletionKind::Class,
            detail: descriptor.args.clone(),
            insert_text: synthesize_snippet(descriptor),
            sort_text: sort_text.to_string(),
        })
        .collect()
}

/// Offers component snippets when a template line ends in a render call
pub struct CompletionProvider<P: SourceProvider> {
    cache: Arc<CatalogCache<P>>,
    languages: Vec<String>,
    sort_text: String,
}

impl<P: SourceProvider> CompletionProvider<P> {
    pub fn new(cache: Arc<CatalogCache<P>>) -> Self {
        Self {
            cache,
            languages: languages::ALL.iter().map(|l| l.to_string()).collect(),
            sort_text: completion::SORT_TEXT.to_string(),
        }
    }

    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_sort_text(mut self, sort_text: impl Into<String>) -> Self {
        self.sort_text = sort_text.into();
        self
    }

    pub fn cache(&self) -> &Arc<CatalogCache<P>> {
        &self.cache
    }

    pub fn supports_language(&self, language: &str) -> bool {
        self.languages
            .iter()
            .any(|l| l.eq_ignore_ascii_case(language))
    }

    /// Completions for the active line, or `None` outside a render call
    pub async fn provide(
        &self,
        language: &str,
        line_prefix: &str,
    ) -> CatalogResult<Option<Vec<CompletionItem>>> {
        if !self.supports_language(language) {
            debug!("Language '{}' is not a template language", language);
            return Ok(None);
        }
        if !is_trigger(line_prefix) {
            return Ok(None);
        }

        let catalog = self.cache.get_or_build().await?;
        Ok(Some(completion_items(&catalog, &self.sort_text)))
    }
}
