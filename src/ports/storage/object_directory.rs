use crate::domain::{
    errors::StorageResult,
    models::StoredObject,
    value_objects::{BucketName, ObjectKey},
};
use async_trait::async_trait;

/// Port for the object listing and deletion calls cleanup relies on.
/// Backed by an S3-compatible store in production and by fakes in tests.
#[async_trait]
pub trait ObjectDirectory: Send + Sync + 'static {
    /// List every object whose key starts with `prefix` (the whole bucket when `None`).
    /// The prefix is a plain string prefix and may end mid-segment. Folder markers
    /// come back with their trailing '/'.
    async fn list_objects(
        &self,
        bucket: &BucketName,
        prefix: Option<&str>,
    ) -> StorageResult<Vec<StoredObject>>;

    /// Delete a single object
    async fn delete_object(&self, bucket: &BucketName, key: &ObjectKey) -> StorageResult<()>;
}
