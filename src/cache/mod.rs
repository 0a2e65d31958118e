//! Catalog caching and invalidation

pub mod catalog_cache;

pub use catalog_cache::CatalogCache;
