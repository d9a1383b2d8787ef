//! Shared mock of the ObjectStore trait for command unit tests.

use async_trait::async_trait;
use mockall::mock;

use mup_core::{BucketInfo, ObjectPage, ObjectStore, Result};

mock! {
    pub Store {}

    #[async_trait]
    impl ObjectStore for Store {
        async fn list_buckets(&self) -> Result<Vec<BucketInfo>>;

        async fn list_objects(
            &self,
            bucket: &str,
            prefix: &str,
            continuation_token: Option<String>,
        ) -> Result<ObjectPage>;

        async fn bucket_exists(&self, bucket: &str) -> Result<bool>;

        async fn create_bucket(&self, bucket: &str) -> Result<()>;

        async fn put_object(
            &self,
            bucket: &str,
            key: &str,
            data: Vec<u8>,
            content_type: &str,
        ) -> Result<()>;
    }
}
