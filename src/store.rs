//! Object store access.
//!
//! The [`ObjectStore`] trait is the seam between the sync loop and S3: the
//! production implementation wraps an `aws_sdk_s3::Client`, and tests
//! substitute a fake. The client handle is built once at startup and passed
//! explicitly to everything that needs it.

use crate::error::SyncError;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use std::path::Path;

/// NOAA open-data buckets live in us-east-1.
const BUCKET_REGION: &str = "us-east-1";

/// One page of a paginated listing.
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    /// Object keys on this page, in store-returned order. May be empty.
    pub keys: Vec<String>,
    /// Continuation token for the next page, or `None` on the last page.
    pub next_continuation: Option<String>,
}

/// Read-only view of a remote object store.
#[async_trait]
pub trait ObjectStore {
    /// Fetches one page of object keys under `prefix`.
    ///
    /// Pass `None` for the first page and the previous page's
    /// `next_continuation` afterwards. A page with no contents yields an
    /// empty `keys`, not an error.
    async fn list_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation: Option<String>,
    ) -> Result<ListPage, SyncError>;

    /// Downloads one object's content to `dest`, overwriting any existing
    /// file.
    ///
    /// Transfer problems (the request or the body stream failing) surface as
    /// [`SyncError::Transfer`]; failing to create the local file surfaces as
    /// [`SyncError::Io`].
    async fn download(&self, bucket: &str, key: &str, dest: &Path) -> Result<(), SyncError>;
}

/// Builds an S3 client for anonymous access to a public bucket.
///
/// The NOAA buckets allow unauthenticated reads, so no credential provider
/// is configured.
pub async fn anonymous_client() -> Client {
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(BUCKET_REGION))
        .no_credentials()
        .load()
        .await;
    Client::new(&config)
}

/// [`ObjectStore`] backed by the AWS S3 SDK.
#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
}

impl S3Store {
    /// Wraps an already-configured S3 client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn list_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation: Option<String>,
    ) -> Result<ListPage, SyncError> {
        let mut request = self.client.list_objects_v2().bucket(bucket).prefix(prefix);

        if let Some(token) = continuation {
            request = request.continuation_token(token);
        }

        let output = request.send().await.map_err(|e| SyncError::List {
            bucket: bucket.to_string(),
            prefix: prefix.to_string(),
            source: Box::new(e),
        })?;

        let keys = output
            .contents()
            .iter()
            .filter_map(|obj| obj.key().map(String::from))
            .collect();

        let next_continuation = if output.is_truncated() == Some(true) {
            output.next_continuation_token().map(String::from)
        } else {
            None
        };

        Ok(ListPage {
            keys,
            next_continuation,
        })
    }

    async fn download(&self, bucket: &str, key: &str, dest: &Path) -> Result<(), SyncError> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| SyncError::Transfer {
                bucket: bucket.to_string(),
                key: key.to_string(),
                source: Box::new(e),
            })?;

        // Stream the body to disk instead of buffering whole files in memory.
        let mut body_reader = output.body.into_async_read();
        let mut file = tokio::fs::File::create(dest).await?;
        tokio::io::copy(&mut body_reader, &mut file)
            .await
            .map_err(|e| SyncError::Transfer {
                bucket: bucket.to_string(),
                key: key.to_string(),
                source: Box::new(e),
            })?;

        Ok(())
    }
}
