//! Cache and invalidation behavior

use super::test_helpers::*;
use async_trait::async_trait;
use render_complete::workspace::InMemorySourceProvider;
use render_complete::{CatalogCache, CatalogResult, SourceProvider};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Notify;

/// Provider whose reads block until released, to hold a build in flight
struct GatedProvider {
    inner: InMemorySourceProvider,
    entered: Notify,
    release: Notify,
}

#[async_trait]
impl SourceProvider for GatedProvider {
    async fn discover(&self) -> CatalogResult<Vec<PathBuf>> {
        self.inner.discover().await
    }

    async fn read(&self, path: &Path) -> io::Result<String> {
        self.entered.notify_one();
        self.release.notified().await;
        self.inner.read(path).await
    }

    fn provider_type(&self) -> &'static str {
        "gated"
    }
}

#[tokio::test]
async fn test_invalidation_during_build_discards_result() -> anyhow::Result<()> {
    let provider = Arc::new(GatedProvider {
        inner: InMemorySourceProvider::with_files([(
            "app/components/card_component.rb",
            CARD_COMPONENT,
        )]),
        entered: Notify::new(),
        release: Notify::new(),
    });
    let cache = Arc::new(CatalogCache::new(Arc::clone(&provider)));

    let building = {
        let cache = Arc::clone(&cache);
        tokio::spawn(async move { cache.get_or_build().await })
    };

    provider.entered.notified().await;
    cache.invalidate().await;
    provider.release.notify_one();

    // The in-flight caller still gets its result...
    let catalog = building.await??;
    assert_eq!(catalog.len(), 1);
    // ...but it is not served to later callers
    assert!(!cache.is_cached().await);

    let stats = cache.stats().await;
    assert_eq!(stats.builds, 1);
    assert_eq!(stats.invalidations, 1);
    assert_eq!(stats.cached_components, None);
    Ok(())
}

#[tokio::test]
async fn test_removed_source_disappears_after_invalidation() -> anyhow::Result<()> {
    let provider = Arc::new(InMemorySourceProvider::with_files([
        ("app/components/card_component.rb", CARD_COMPONENT),
        ("app/components/row_component.rb", ROW_COMPONENT),
    ]));
    let cache = CatalogCache::new(Arc::clone(&provider));
    assert_eq!(cache.get_or_build().await?.len(), 2);

    provider.remove(Path::new("app/components/row_component.rb"));
    assert_eq!(cache.get_or_build().await?.len(), 2);

    cache.invalidate().await;
    let rebuilt = cache.get_or_build().await?;
    assert_eq!(rebuilt.names().collect::<Vec<_>>(), vec!["CardComponent"]);
    Ok(())
}

#[tokio::test]
async fn test_concurrent_readers_share_cached_catalog() -> anyhow::Result<()> {
    let provider = Arc::new(InMemorySourceProvider::with_files([(
        "app/components/card_component.rb",
        CARD_COMPONENT,
    )]));
    let cache = Arc::new(CatalogCache::new(provider));
    let first = cache.get_or_build().await?;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.get_or_build().await })
        })
        .collect();

    for handle in handles {
        let catalog = handle.await??;
        assert!(Arc::ptr_eq(&catalog, &first));
    }
    assert_eq!(cache.stats().await.builds, 1);
    Ok(())
}
