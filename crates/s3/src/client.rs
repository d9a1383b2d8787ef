//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from mup-core.

use async_trait::async_trait;

use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::head_bucket::HeadBucketError;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
use aws_smithy_types::error::display::DisplayErrorContext;

use mup_core::{BucketInfo, Error, ObjectInfo, ObjectPage, ObjectStore, Result, Settings};

/// S3 client wrapper
pub struct S3Client {
    inner: aws_sdk_s3::Client,
}

impl S3Client {
    /// Create a new S3 client from resolved settings
    pub async fn new(settings: &Settings) -> Result<Self> {
        // Build credentials provider
        let credentials = aws_credential_types::Credentials::new(
            settings.access_key.clone(),
            settings.secret_key.clone(),
            None, // session token
            None, // expiry
            "mup-static-credentials",
        );

        // Build SDK config
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(aws_config::Region::new(settings.region.clone()))
            .endpoint_url(&settings.endpoint)
            .load()
            .await;

        // The SDK's default HTTPS stack does not expose a switch to accept
        // invalid certificates; the flag stays visible in config-show.
        if !settings.verify_ssl {
            tracing::warn!(
                "S3_VERIFY_SSL=false requested, but TLS certificate verification \
                 cannot be disabled with this SDK build; verification stays on"
            );
        }

        // Path-style addressing for compatibility with self-hosted servers
        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(true)
            .build();

        let client = aws_sdk_s3::Client::from_conf(s3_config);

        Ok(Self { inner: client })
    }
}

/// Format a store failure with its full source chain
///
/// `SdkError`'s own `Display` is just "service error" or "dispatch failure";
/// the error code, message, and status live in the source chain.
fn store_error<E: std::error::Error>(e: &E) -> Error {
    Error::Network(DisplayErrorContext(e).to_string())
}

/// Classify a head-bucket failure
///
/// Only a modeled NotFound service error means "bucket missing"; everything
/// else (auth, connection, timeout) stays an error.
fn classify_head_bucket(e: SdkError<HeadBucketError>) -> Result<bool> {
    if e.as_service_error()
        .is_some_and(HeadBucketError::is_not_found)
    {
        Ok(false)
    } else {
        Err(store_error(&e))
    }
}

/// Classify a list-objects failure
fn classify_list_objects(e: SdkError<ListObjectsV2Error>, bucket: &str) -> Error {
    if e.as_service_error()
        .is_some_and(ListObjectsV2Error::is_no_such_bucket)
    {
        Error::NotFound(format!("Bucket not found: {bucket}"))
    } else {
        store_error(&e)
    }
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn list_buckets(&self) -> Result<Vec<BucketInfo>> {
        let response = self
            .inner
            .list_buckets()
            .send()
            .await
            .map_err(|e| store_error(&e))?;

        let buckets = response
            .buckets()
            .iter()
            .map(|b| BucketInfo {
                name: b.name().unwrap_or_default().to_string(),
                created: b
                    .creation_date()
                    .and_then(|d| jiff::Timestamp::from_second(d.secs()).ok()),
            })
            .collect();

        Ok(buckets)
    }

    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: Option<String>,
    ) -> Result<ObjectPage> {
        let mut request = self.inner.list_objects_v2().bucket(bucket);

        // Raw prefix; empty string means no filter
        if !prefix.is_empty() {
            request = request.prefix(prefix);
        }

        if let Some(token) = continuation_token {
            request = request.continuation_token(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify_list_objects(e, bucket))?;

        let objects = response
            .contents()
            .iter()
            .map(|object| ObjectInfo {
                key: object.key().unwrap_or_default().to_string(),
                size_bytes: object.size().unwrap_or(0),
            })
            .collect();

        Ok(ObjectPage {
            objects,
            truncated: response.is_truncated().unwrap_or(false),
            continuation_token: response.next_continuation_token().map(|s| s.to_string()),
        })
    }

    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        match self.inner.head_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(true),
            Err(e) => classify_head_bucket(e),
        }
    }

    async fn create_bucket(&self, bucket: &str) -> Result<()> {
        self.inner
            .create_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| store_error(&e))?;

        Ok(())
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        let body = aws_sdk_s3::primitives::ByteStream::from(data);

        self.inner
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| store_error(&e))?;

        Ok(())
    }
}
