//! Main sync loop: enumerate prefixes, list keys, download objects.

use crate::error::SyncError;
use crate::store::ObjectStore;
use crate::types::SyncConfig;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Derives the local path for a remote key by joining it onto the root.
///
/// The remote hierarchy is preserved verbatim, so
/// `/data` + `ABI-L2-LSAC/2021/294/05/file1.nc` becomes
/// `/data/ABI-L2-LSAC/2021/294/05/file1.nc`.
pub fn local_path(root: &Path, key: &str) -> PathBuf {
    root.join(key)
}

/// Lists every object key under `prefix`, following continuation tokens
/// until the store signals the last page.
///
/// Keys are accumulated in store-returned order. A listing failure on any
/// page propagates; there is no per-page fault tolerance.
pub async fn list_prefix<S: ObjectStore>(
    store: &S,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<String>, SyncError> {
    let mut keys = Vec::new();
    let mut continuation = None;

    loop {
        let page = store.list_page(bucket, prefix, continuation).await?;
        keys.extend(page.keys);

        match page.next_continuation {
            Some(token) => continuation = Some(token),
            None => break,
        }
    }

    Ok(keys)
}

/// Downloads one object to its mirrored local path, creating intermediate
/// directories first.
///
/// Directory creation is idempotent. Filesystem errors propagate as
/// [`SyncError::Io`]; only the transfer itself reports
/// [`SyncError::Transfer`].
async fn download_object<S: ObjectStore>(
    store: &S,
    bucket: &str,
    key: &str,
    root: &Path,
) -> Result<(), SyncError> {
    let dest = local_path(root, key);

    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    store.download(bucket, key, &dest).await?;
    info!("Downloaded {} to {}", key, dest.display());
    Ok(())
}

/// Mirrors every object under one prefix.
///
/// A failed transfer is logged and skipped; the remaining keys are still
/// attempted. Any other error (listing, filesystem) aborts the run.
pub async fn sync_prefix<S: ObjectStore>(
    store: &S,
    bucket: &str,
    prefix: &str,
    root: &Path,
) -> Result<(), SyncError> {
    let keys = list_prefix(store, bucket, prefix).await?;

    for key in keys {
        match download_object(store, bucket, &key, root).await {
            Ok(()) => {}
            Err(err @ SyncError::Transfer { .. }) => {
                warn!("{}", err);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

/// Runs the full mirror: every hour of every day in the configured range,
/// strictly sequentially.
pub async fn run_sync<S: ObjectStore>(store: &S, config: &SyncConfig) -> Result<(), SyncError> {
    for slot in config.range.hour_slots() {
        let prefix = slot.key_prefix(&config.base_prefix);
        info!("Listing s3://{}/{}", config.bucket, prefix);

        sync_prefix(store, &config.bucket, &prefix, &config.local_root).await?;
    }

    Ok(())
}
