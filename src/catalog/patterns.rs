//! Compiled extraction patterns for component sources

use crate::core::constants::discovery;
use once_cell::sync::Lazy;
use regex::Regex;

/// The two patterns applied to every component source
#[derive(Debug, Clone)]
pub struct ComponentPatterns {
    name: Regex,
    args: Regex,
}

// Lazy static initialization of the shared pattern set
static DEFAULT_PATTERNS: Lazy<Option<ComponentPatterns>> = Lazy::new(|| {
    if let (Ok(name), Ok(args)) = (
        Regex::new(discovery::NAME_PATTERN),
        Regex::new(discovery::ARGS_PATTERN),
    ) {
        Some(ComponentPatterns { name, args })
    } else {
        tracing::error!("Built-in component patterns failed to compile");
        None
    }
});

impl ComponentPatterns {
    /// Compile a custom pattern pair. Each pattern needs one capture group.
    pub fn new(name_pattern: &str, args_pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name: Regex::new(name_pattern)?,
            args: Regex::new(args_pattern)?,
        })
    }

    /// The shared built-in pattern set
    pub fn builtin() -> Option<&'static ComponentPatterns> {
        DEFAULT_PATTERNS.as_ref()
    }

    /// Declared component name, from the first class declaration that
    /// inherits from something named like a component
    pub fn match_name<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.name
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Raw parameter text of the first initializer anywhere in `text`.
    ///
    /// Not scoped to the class matched by [`match_name`](Self::match_name).
    pub fn match_args<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.args
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
