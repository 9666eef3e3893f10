use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    domain::{
        errors::StorageResult,
        models::StoredObject,
        value_objects::{BucketName, ObjectKey},
    },
    ports::{services::ObjectService, storage::ObjectDirectory},
};

/// Implementation of ObjectService forwarding to the object directory
#[derive(Clone)]
pub struct ObjectServiceImpl {
    directory: Arc<dyn ObjectDirectory>,
}

impl ObjectServiceImpl {
    /// Create a new ObjectServiceImpl instance
    pub fn new(directory: Arc<dyn ObjectDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl ObjectService for ObjectServiceImpl {
    async fn list_objects(
        &self,
        bucket: &BucketName,
        prefix: Option<&str>,
    ) -> StorageResult<Vec<StoredObject>> {
        self.directory.list_objects(bucket, prefix).await
    }

    async fn search_objects(
        &self,
        bucket: &BucketName,
        prefix: Option<&str>,
        pattern: &str,
    ) -> StorageResult<Vec<StoredObject>> {
        let objects = self.directory.list_objects(bucket, prefix).await?;
        let listed = objects.len();

        let matches: Vec<StoredObject> = objects
            .into_iter()
            .filter(|o| o.key.as_str().contains(pattern))
            .collect();

        debug!(
            bucket = %bucket,
            pattern,
            listed,
            matched = matches.len(),
            "Searched objects"
        );
        Ok(matches)
    }

    async fn delete_object(&self, bucket: &BucketName, key: &ObjectKey) -> StorageResult<()> {
        self.directory.delete_object(bucket, key).await?;
        info!(bucket = %bucket, key = %key, "Deleted object");
        Ok(())
    }
}
