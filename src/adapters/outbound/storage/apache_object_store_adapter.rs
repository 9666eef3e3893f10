use async_trait::async_trait;
use futures::StreamExt;
use object_store::{path::Path as ObjectPath, ObjectStore as ApacheObjectStore};
use std::collections::BTreeSet;
use std::ops::Bound;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    domain::{
        errors::{StorageError, StorageResult},
        models::StoredObject,
        value_objects::{BucketName, ObjectKey},
    },
    ports::storage::ObjectDirectory,
};

/// Adapter that implements the ObjectDirectory port using Apache object_store.
///
/// An object_store instance is bound to one bucket when it is built, so the
/// adapter refuses calls for any other bucket.
pub struct ApacheObjectStoreAdapter {
    inner: Arc<dyn ApacheObjectStore>,
    bucket: BucketName,
}

impl ApacheObjectStoreAdapter {
    pub fn new(store: Arc<dyn ApacheObjectStore>, bucket: BucketName) -> Self {
        Self {
            inner: store,
            bucket,
        }
    }

    fn ensure_bucket(&self, bucket: &BucketName, operation: &str) -> StorageResult<()> {
        if bucket != &self.bucket {
            return Err(StorageError::UnsupportedOperation {
                operation: operation.to_string(),
                reason: format!(
                    "store is bound to bucket '{}', not '{}'",
                    self.bucket, bucket
                ),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectDirectory for ApacheObjectStoreAdapter {
    async fn list_objects(
        &self,
        bucket: &BucketName,
        prefix: Option<&str>,
    ) -> StorageResult<Vec<StoredObject>> {
        self.ensure_bucket(bucket, "list_objects")?;

        let prefix = prefix.unwrap_or_default();
        let scope = listing_scope(prefix);
        let mut stream = self.inner.list(scope.as_ref());
        let mut listed = Vec::new();

        while let Some(result) = stream.next().await {
            let meta = result.map_err(StorageError::from)?;
            if meta.location.as_ref().starts_with(prefix) {
                listed.push(meta);
            }
        }

        let locations: BTreeSet<String> = listed.iter().map(|m| m.location.to_string()).collect();
        let mut objects = Vec::with_capacity(listed.len());

        for meta in listed {
            let mut location = meta.location.to_string();
            if meta.size == 0 && has_children(&locations, &location) {
                location.push(DELIMITER);
            }

            let key = match ObjectKey::new(location) {
                Ok(key) => key,
                Err(e) => {
                    warn!(location = %meta.location, "Skipping listed object with invalid key: {}", e);
                    continue;
                }
            };

            objects.push(StoredObject {
                key,
                size: meta.size,
                last_modified: meta.last_modified,
                storage_class: None,
                e_tag: meta.e_tag,
            });
        }

        debug!(bucket = %bucket, prefix, count = objects.len(), "Listed objects");
        Ok(objects)
    }

    async fn delete_object(&self, bucket: &BucketName, key: &ObjectKey) -> StorageResult<()> {
        self.ensure_bucket(bucket, "delete_object")?;

        let path = ObjectPath::from(key.as_str());

        self.inner
            .delete(&path)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}

const DELIMITER: char = '/';

/// `object_store` lists whole path segments while an S3 prefix is a raw
/// string prefix, so listing starts at the last complete segment of `prefix`
/// and callers narrow the results with `starts_with`.
fn listing_scope(prefix: &str) -> Option<ObjectPath> {
    let idx = prefix.rfind(DELIMITER)?;
    let parent = prefix[..idx].trim_end_matches(DELIMITER);
    (!parent.is_empty()).then(|| ObjectPath::from(parent))
}

/// `object_store` drops the trailing '/' of folder markers, so a listed
/// location that other listed keys live under is restored as a marker.
fn has_children(locations: &BTreeSet<String>, location: &str) -> bool {
    let dir = format!("{}{}", location, DELIMITER);
    locations
        .range::<str, _>((Bound::Included(dir.as_str()), Bound::Unbounded))
        .next()
        .is_some_and(|next| next.starts_with(&dir))
}
