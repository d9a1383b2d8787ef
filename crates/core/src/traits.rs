//! ObjectStore trait definition
//!
//! This trait defines the interface for S3-compatible storage operations.
//! It allows the CLI to be decoupled from the specific S3 SDK implementation.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

/// Metadata for a listed object
#[derive(Debug, Clone, Serialize)]
pub struct ObjectInfo {
    /// Object key
    pub key: String,

    /// Size in bytes
    pub size_bytes: i64,
}

/// Metadata for a bucket
#[derive(Debug, Clone, Serialize)]
pub struct BucketInfo {
    /// Bucket name
    pub name: String,

    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<jiff::Timestamp>,
}

/// One page of a paginated object listing
#[derive(Debug, Clone, Serialize)]
pub struct ObjectPage {
    /// Objects in this page, in store-returned order
    pub objects: Vec<ObjectInfo>,

    /// Whether more pages are available
    pub truncated: bool,

    /// Continuation token for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
}

/// Trait for S3-compatible storage operations
///
/// This trait is implemented by the S3 adapter and can be mocked for testing.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List all buckets visible to the credentials
    async fn list_buckets(&self) -> Result<Vec<BucketInfo>>;

    /// List one page of objects under a prefix
    ///
    /// An empty prefix means no filter. Pass the previous page's
    /// continuation token to fetch the next page.
    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: Option<String>,
    ) -> Result<ObjectPage>;

    /// Check whether a bucket exists
    async fn bucket_exists(&self, bucket: &str) -> Result<bool>;

    /// Create a bucket
    async fn create_bucket(&self, bucket: &str) -> Result<()>;

    /// Upload a whole object with the given content type
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<()>;
}
