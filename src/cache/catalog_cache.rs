use crate::catalog::CatalogBuilder;
use crate::core::{CacheStats, Catalog, CatalogResult, SourceProvider};
use crate::workspace::read_all;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct CacheState {
    catalog: Option<Arc<Catalog>>,
    /// Bumped on every invalidation; a build only lands if it is unchanged
    generation: u64,
    stats: CacheStats,
}

/// Lazily built component catalog, rebuilt in full after invalidation
pub struct CatalogCache<P: SourceProvider> {
    provider: Arc<P>,
    builder: CatalogBuilder,
    state: RwLock<CacheState>,
}

impl<P: SourceProvider> CatalogCache<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self::with_builder(provider, CatalogBuilder::new())
    }

    pub fn with_builder(provider: Arc<P>, builder: CatalogBuilder) -> Self {
        Self {
            provider,
            builder,
            state: RwLock::new(CacheState::default()),
        }
    }

    pub fn provider(&self) -> &Arc<P> {
        &self.provider
    }

    /// Return the cached catalog, building it first if needed
    pub async fn get_or_build(&self) -> CatalogResult<Arc<Catalog>> {
        let generation = {
            let state = self.state.read().await;
            if let Some(catalog) = &state.catalog {
                return Ok(Arc::clone(catalog));
            }
            state.generation
        };

        debug!(
            "Building component catalog via {} provider",
            self.provider.provider_type()
        );
        let results = read_all(self.provider.as_ref()).await?;
        let catalog = Arc::new(self.builder.build_from_results(results));

        let mut state = self.state.write().await;
        state.stats.builds += 1;
        if state.generation == generation {
            state.catalog = Some(Arc::clone(&catalog));
            state.stats.cached_components = Some(catalog.len());
            state.stats.built_at = Some(Utc::now());
            info!("Component catalog built with {} components", catalog.len());
        } else {
            debug!("Catalog invalidated during build; result not cached");
        }

        Ok(catalog)
    }

    /// Drop the cached catalog; the next request rebuilds it
    pub async fn invalidate(&self) {
        let mut state = self.state.write().await;
        state.generation += 1;
        state.stats.invalidations += 1;
        state.stats.cached_components = None;
        if state.catalog.take().is_some() {
            debug!("Component catalog invalidated");
        }
    }

    pub async fn is_cached(&self) -> bool {
        self.state.read().await.catalog.is_some()
    }

    pub async fn stats(&self) -> CacheStats {
        self.state.read().await.stats.clone()
    }
}
