//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from bkt-core.
//! Construction is synchronous and performs no I/O: the region and the
//! resolved credentials are handed to the SDK as-is, and anything wrong with
//! them surfaces from the first request.

use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::config::{BehaviorVersion, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use aws_smithy_types::error::display::DisplayErrorContext;
use tokio::io::AsyncWriteExt;

use bkt_core::{
    BucketSummary, CredentialBundle, DEFAULT_REGION, Error, ObjectStore, ObjectSummary, Result,
};

/// S3 client bound to one region and one credential bundle
pub struct S3Client {
    inner: aws_sdk_s3::Client,
    region: String,
}

impl S3Client {
    /// Create a new client for the given region and credentials.
    ///
    /// Pure construction: the region string is not validated and absent
    /// credentials are passed through empty, so both are only rejected by the
    /// service once a request is sent.
    pub fn new(region: &str, credentials: &CredentialBundle) -> Self {
        if !credentials.is_complete() {
            tracing::debug!("credentials incomplete; requests will fail at the service");
        }

        let provider = aws_credential_types::Credentials::new(
            credentials.access_key().to_owned(),
            credentials.secret_key().to_owned(),
            credentials.session_token().map(str::to_owned),
            None, // expiry
            "bkt-env",
        );

        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(region.to_owned()))
            .credentials_provider(provider)
            .build();

        tracing::debug!(region, "constructed storage client");

        Self {
            inner: aws_sdk_s3::Client::from_conf(config),
            region: region.to_owned(),
        }
    }

    /// The region this client is bound to
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Get the underlying aws-sdk-s3 client
    pub fn inner(&self) -> &aws_sdk_s3::Client {
        &self.inner
    }
}

/// Render an SDK failure with its full error chain
fn api_error<E: std::error::Error>(err: E) -> Error {
    Error::api(DisplayErrorContext(err))
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn list_buckets(&self) -> Result<Vec<BucketSummary>> {
        let response = self
            .inner
            .list_buckets()
            .send()
            .await
            .map_err(api_error)?;

        let buckets = response
            .buckets()
            .iter()
            .map(|bucket| {
                let mut summary = BucketSummary::new(bucket.name().unwrap_or_default());
                if let Some(creation_date) = bucket.creation_date() {
                    summary.created = jiff::Timestamp::from_second(creation_date.secs()).ok();
                }
                summary
            })
            .collect();

        Ok(buckets)
    }

    async fn bucket_region(&self, bucket: &str) -> Result<String> {
        let response = self
            .inner
            .get_bucket_location()
            .bucket(bucket)
            .send()
            .await
            .map_err(api_error)?;

        // The service encodes the default region as an empty location.
        let region = response
            .location_constraint()
            .map(BucketLocationConstraint::as_str)
            .filter(|location| !location.is_empty())
            .unwrap_or(DEFAULT_REGION)
            .to_string();

        Ok(region)
    }

    async fn create_bucket(&self, bucket: &str) -> Result<()> {
        let mut request = self.inner.create_bucket().bucket(bucket);

        // An explicit constraint naming the default region is rejected by the
        // service, so it is only sent for any other region.
        if self.region != DEFAULT_REGION {
            let constraint = BucketLocationConstraint::from(self.region.as_str());
            let config = CreateBucketConfiguration::builder()
                .location_constraint(constraint)
                .build();
            request = request.create_bucket_configuration(config);
        }

        request.send().await.map_err(api_error)?;

        Ok(())
    }

    async fn delete_bucket(&self, bucket: &str) -> Result<()> {
        self.inner
            .delete_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(api_error)?;

        Ok(())
    }

    async fn list_objects(&self, bucket: &str, prefix: Option<&str>) -> Result<Vec<ObjectSummary>> {
        let mut request = self.inner.list_objects_v2().bucket(bucket);

        if let Some(prefix) = prefix {
            request = request.prefix(prefix);
        }

        let response = request.send().await.map_err(api_error)?;

        let objects = response
            .contents()
            .iter()
            .map(|object| {
                let mut summary = ObjectSummary::new(
                    object.key().unwrap_or_default(),
                    object.size().unwrap_or(0),
                );
                if let Some(modified) = object.last_modified() {
                    summary.last_modified = jiff::Timestamp::from_second(modified.secs()).ok();
                }
                summary
            })
            .collect();

        Ok(objects)
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        let body = ByteStream::from(data);

        self.inner
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(body)
            .send()
            .await
            .map_err(api_error)?;

        Ok(())
    }

    async fn download_object(&self, bucket: &str, key: &str, dest: &Path) -> Result<u64> {
        let response = self
            .inner
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(api_error)?;

        // Stream the body straight into the file; a mid-stream failure
        // surfaces from the copy as an error.
        let mut body = response.body.into_async_read();
        let mut file = tokio::fs::File::create(dest).await?;
        let written = tokio::io::copy(&mut body, &mut file).await?;
        file.flush().await?;

        Ok(written)
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        self.inner
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(api_error)?;

        Ok(())
    }
}
