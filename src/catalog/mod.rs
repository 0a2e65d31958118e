//! Component discovery from source text

pub mod builder;
pub mod patterns;

pub use builder::{build_catalog, extract_descriptor, CatalogBuilder};
pub use patterns::ComponentPatterns;
