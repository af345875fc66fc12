//! ObjectStore trait definition
//!
//! This trait defines the interface for the storage operations bkt exposes.
//! It keeps the command layer decoupled from the SDK adapter in bkt-s3.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::format::format_bytes;

/// A bucket as reported by the listing operation
#[derive(Debug, Clone)]
pub struct BucketSummary {
    /// Bucket name
    pub name: String,

    /// Creation timestamp, when the service reported one
    pub created: Option<jiff::Timestamp>,
}

impl BucketSummary {
    /// Create a summary with no creation timestamp
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created: None,
        }
    }
}

/// An object as reported by the listing operation
#[derive(Debug, Clone)]
pub struct ObjectSummary {
    /// Object key
    pub key: String,

    /// Size in bytes
    pub size_bytes: i64,

    /// Human-readable size
    pub size_human: String,

    /// Last modified timestamp, when the service reported one
    pub last_modified: Option<jiff::Timestamp>,
}

impl ObjectSummary {
    /// Create a summary for an object of the given size
    pub fn new(key: impl Into<String>, size_bytes: i64) -> Self {
        Self {
            key: key.into(),
            size_bytes,
            size_human: format_bytes(size_bytes.max(0) as u64),
            last_modified: None,
        }
    }
}

/// Trait for the storage operations behind the eight commands.
///
/// Implementations issue exactly one service request per call; pagination,
/// retries, and transport concerns stay inside the SDK.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List all buckets visible to the credentials
    async fn list_buckets(&self) -> Result<Vec<BucketSummary>>;

    /// Resolve the region a bucket lives in
    async fn bucket_region(&self, bucket: &str) -> Result<String>;

    /// Create a bucket in the client's bound region
    async fn create_bucket(&self, bucket: &str) -> Result<()>;

    /// Delete a bucket by name; fails on a non-empty bucket
    async fn delete_bucket(&self, bucket: &str) -> Result<()>;

    /// List objects in a bucket, optionally under a key prefix
    async fn list_objects(&self, bucket: &str, prefix: Option<&str>) -> Result<Vec<ObjectSummary>>;

    /// Store one object from an in-memory buffer
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<()>;

    /// Stream one object's body into a local file, returning bytes written
    async fn download_object(&self, bucket: &str, key: &str, dest: &Path) -> Result<u64>;

    /// Delete one object by key, with no existence check
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_summary_precomputes_human_size() {
        let summary = ObjectSummary::new("docs/report.pdf", 1536);
        assert_eq!(summary.key, "docs/report.pdf");
        assert_eq!(summary.size_bytes, 1536);
        assert_eq!(summary.size_human, "1.5 KB");
        assert!(summary.last_modified.is_none());
    }

    #[test]
    fn test_object_summary_negative_size_clamps() {
        let summary = ObjectSummary::new("odd", -1);
        assert_eq!(summary.size_human, "0 Bytes");
    }

    #[test]
    fn test_bucket_summary() {
        let summary = BucketSummary::new("my-bucket");
        assert_eq!(summary.name, "my-bucket");
        assert!(summary.created.is_none());
    }
}
