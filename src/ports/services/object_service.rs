use crate::domain::{
    errors::StorageResult,
    models::StoredObject,
    value_objects::{BucketName, ObjectKey},
};
use async_trait::async_trait;

/// Port for the single-call bucket operations exposed next to cleanup
#[async_trait]
pub trait ObjectService: Send + Sync + 'static {
    /// List objects with a prefix
    async fn list_objects(
        &self,
        bucket: &BucketName,
        prefix: Option<&str>,
    ) -> StorageResult<Vec<StoredObject>>;

    /// List objects under a prefix whose key contains `pattern`
    async fn search_objects(
        &self,
        bucket: &BucketName,
        prefix: Option<&str>,
        pattern: &str,
    ) -> StorageResult<Vec<StoredObject>>;

    /// Delete an object
    async fn delete_object(&self, bucket: &BucketName, key: &ObjectKey) -> StorageResult<()>;
}
