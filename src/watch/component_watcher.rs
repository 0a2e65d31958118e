//! Filesystem watcher that invalidates the component catalog

use crate::cache::CatalogCache;
use crate::core::{CatalogResult, ChangeKind, ComponentChange};
use crate::workspace::FsSourceProvider;
use notify::event::{CreateKind, EventKind, ModifyKind, RenameMode};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Map a raw filesystem event onto the component changes it implies.
///
/// Renames, removals and new directories also count when they touch the
/// component tree, since a moved directory reports only its own path.
pub fn component_changes(event: &Event, provider: &FsSourceProvider) -> Vec<ComponentChange> {
    let (kind, structural) = match event.kind {
        EventKind::Create(CreateKind::Folder) => (ChangeKind::Created, true),
        EventKind::Create(_) => (ChangeKind::Created, false),
        EventKind::Modify(ModifyKind::Name(RenameMode::From)) => (ChangeKind::Removed, true),
        EventKind::Modify(ModifyKind::Name(RenameMode::To)) => (ChangeKind::Created, true),
        EventKind::Modify(ModifyKind::Name(_)) => (ChangeKind::Modified, true),
        EventKind::Modify(_) => (ChangeKind::Modified, false),
        EventKind::Remove(_) => (ChangeKind::Removed, true),
        _ => return Vec::new(),
    };

    event
        .paths
        .iter()
        .filter(|path| {
            provider.matches(path) || (structural && provider.touches_component_tree(path))
        })
        .map(|path| ComponentChange {
            path: path.clone(),
            kind,
        })
        .collect()
}

/// Watches every workspace root and clears the cache on component changes
pub struct ComponentWatcher {
    watcher: RecommendedWatcher,
    watched_roots: Vec<PathBuf>,
    change_sender: broadcast::Sender<ComponentChange>,
    invalidate_handle: JoinHandle<()>,
    cache: Arc<CatalogCache<FsSourceProvider>>,
}

impl ComponentWatcher {
    /// Start watching. Must be called from within a tokio runtime.
    pub fn start(
        provider: Arc<FsSourceProvider>,
        cache: Arc<CatalogCache<FsSourceProvider>>,
    ) -> CatalogResult<Self> {
        let (change_sender, _) = broadcast::channel(256);
        let (raw_sender, raw_receiver) = mpsc::unbounded_channel();

        let filter = Arc::clone(&provider);
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    for change in component_changes(&event, &filter) {
                        debug!("Component source {:?}: {}", change.kind, change.path.display());
                        if raw_sender.send(change).is_err() {
                            debug!("Invalidation loop gone; dropping change");
                        }
                    }
                }
                Err(e) => {
                    error!("File watching error: {}", e);
                }
            },
            notify::Config::default(),
        )?;

        let mut watched_roots = Vec::new();
        for root in provider.roots() {
            if root.is_dir() {
                watcher.watch(root, RecursiveMode::Recursive)?;
                watched_roots.push(root.clone());
            } else {
                warn!("Not watching missing workspace root: {}", root.display());
            }
        }

        let invalidate_handle =
            Self::spawn_invalidator(raw_receiver, change_sender.clone(), Arc::clone(&cache));

        info!("Watching {} workspace root(s) for component changes", watched_roots.len());
        Ok(Self {
            watcher,
            watched_roots,
            change_sender,
            invalidate_handle,
            cache,
        })
    }

    fn spawn_invalidator(
        mut receiver: mpsc::UnboundedReceiver<ComponentChange>,
        sender: broadcast::Sender<ComponentChange>,
        cache: Arc<CatalogCache<FsSourceProvider>>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            while let Some(change) = receiver.recv().await {
                cache.invalidate().await;
                // No receivers just means nobody is listening
                let _ = sender.send(change);
            }
            debug!("Catalog invalidation loop stopped");
        })
    }

    /// Subscribe to component changes. Each arrives after the cache was cleared.
    pub fn subscribe(&self) -> broadcast::Receiver<ComponentChange> {
        self.change_sender.subscribe()
    }

    pub fn watched_roots(&self) -> &[PathBuf] {
        &self.watched_roots
    }

    /// Stop watching and clear the cache
    pub async fn dispose(mut self) {
        for root in std::mem::take(&mut self.watched_roots) {
            if let Err(e) = self.watcher.unwatch(&root) {
                warn!("Failed to unwatch {}: {}", root.display(), e);
            }
        }
        self.invalidate_handle.abort();
        self.cache.invalidate().await;
        info!("Component watcher disposed");
    }
}
