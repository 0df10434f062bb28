//! GoesSync - Mirror NOAA GOES-17 observation files from S3 to local disk
//!
//! This library walks a fixed date range, expands it into the bucket's
//! `{product}/{year}/{day-of-year}/{hour}/` key prefixes, lists every object
//! under each prefix through the paginated `ListObjectsV2` API, and downloads
//! each object to a local path that mirrors its remote key.
//!
//! Downloads run strictly sequentially. A single object failing to transfer
//! is logged and skipped; listing or filesystem errors terminate the run.
//!
//! # Example
//!
//! ```no_run
//! use goessync::store::{anonymous_client, S3Store};
//! use goessync::{run_sync, SyncConfig};
//!
//! # async fn example() -> Result<(), goessync::SyncError> {
//! let store = S3Store::new(anonymous_client().await);
//! run_sync(&store, &SyncConfig::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod dates;
pub mod error;
pub mod store;
pub mod sync;
pub mod types;

pub use dates::{DateRange, HourSlot};
pub use error::SyncError;
pub use sync::run_sync;
pub use types::SyncConfig;
