//! Component source discovery and reading

pub mod fs_provider;
pub mod memory_provider;

pub use fs_provider::FsSourceProvider;
pub use memory_provider::InMemorySourceProvider;

use crate::core::SourceProvider;
use futures::future::join_all;
use std::io;
use std::path::PathBuf;

/// Discover every source and read them concurrently.
///
/// Read failures are returned per path so one bad file cannot fail the batch.
pub async fn read_all<P: SourceProvider + ?Sized>(
    provider: &P,
) -> crate::core::CatalogResult<Vec<(PathBuf, io::Result<String>)>> {
    let paths = provider.discover().await?;
    let reads = paths.into_iter().map(|path| async move {
        let result = provider.read(&path).await;
        (path, result)
    });
    Ok(join_all(reads).await)
}
