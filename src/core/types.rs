use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A component discovered by inspecting its source text.
///
/// `args` holds the initializer parameter list verbatim and is `None` when the
/// source has no initializer or an empty one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ComponentDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,
}

impl ComponentDescriptor {
    pub fn new(name: impl Into<String>, args: Option<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// One readable source file, keyed by its path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub id: PathBuf,
    pub text: String,
}

impl SourceUnit {
    pub fn new(id: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// The components discovered across a project at one point in time.
///
/// Order follows discovery order and carries no meaning.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Catalog {
    components: Vec<ComponentDescriptor>,
}

impl Catalog {
    pub fn new(components: Vec<ComponentDescriptor>) -> Self {
        Self { components }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComponentDescriptor> {
        self.components.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|c| c.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components.iter().find(|c| c.name == name)
    }

    pub fn as_slice(&self) -> &[ComponentDescriptor] {
        &self.components
    }
}

impl IntoIterator for Catalog {
    type Item = ComponentDescriptor;
    type IntoIter = std::vec::IntoIter<ComponentDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ComponentDescriptor;
    type IntoIter = std::slice::Iter<'a, ComponentDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl From<Vec<ComponentDescriptor>> for Catalog {
    fn from(components: Vec<ComponentDescriptor>) -> Self {
        Self::new(components)
    }
}

impl FromIterator<ComponentDescriptor> for Catalog {
    fn from_iter<I: IntoIterator<Item = ComponentDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    Class,
}

/// An insertable suggestion offered at a render call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Snippet text with `${n:default}` placeholder fields
    pub insert_text: String,
    pub sort_text: String,
}

/// Kind of filesystem change seen on a component source
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Created,
    Modified,
    Removed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComponentChange {
    pub path: PathBuf,
    pub kind: ChangeKind,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheStats {
    pub builds: u64,
    pub invalidations: u64,
    pub cached_components: Option<usize>,
    pub built_at: Option<DateTime<Utc>>,
}
