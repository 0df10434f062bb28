//! Error types for mirror operations.

use std::io;
use thiserror::Error;

/// Errors that can occur while mirroring a bucket prefix to disk.
#[derive(Error, Debug)]
pub enum SyncError {
    /// I/O error during local file operations.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// S3 `ListObjectsV2` failed for a prefix.
    #[error("Failed to list s3://{bucket}/{prefix}: {source}")]
    List {
        /// Bucket name.
        bucket: String,
        /// Key prefix being listed.
        prefix: String,
        /// Underlying SDK error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// One object's content failed to transfer.
    ///
    /// This is the only error kind the sync loop recovers from: the failure
    /// is logged and iteration moves on to the next object. Everything else
    /// terminates the run.
    #[error("Failed to download {key}: {source}")]
    Transfer {
        /// Bucket name.
        bucket: String,
        /// Object key that failed.
        key: String,
        /// Underlying SDK or stream error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
