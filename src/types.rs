//! Configuration for a mirror run.

use crate::dates::DateRange;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Configuration for mirroring a GOES product to local disk.
///
/// There is no CLI or environment surface; a run is fully described by these
/// fields, and the defaults carry the fixed constants of the production
/// ingest (GOES-17 `ABI-L2-LSAC`, October 2021 through mid June 2022).
///
/// # Example
///
/// ```
/// use goessync::SyncConfig;
///
/// let config = SyncConfig::default();
/// assert_eq!(config.bucket, "noaa-goes17");
/// ```
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Bucket to mirror from (e.g. `"noaa-goes17"`).
    pub bucket: String,
    /// Product prefix the key hierarchy hangs under (e.g. `"ABI-L2-LSAC"`).
    pub base_prefix: String,
    /// Local directory the remote hierarchy is mirrored into.
    pub local_root: PathBuf,
    /// Dates to cover; start inclusive, end exclusive.
    pub range: DateRange,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            bucket: "noaa-goes17".to_string(),
            base_prefix: "ABI-L2-LSAC".to_string(),
            local_root: PathBuf::from("data"),
            range: DateRange {
                start: NaiveDate::from_ymd_opt(2021, 10, 21).unwrap(),
                end: NaiveDate::from_ymd_opt(2022, 6, 16).unwrap(),
            },
        }
    }
}
