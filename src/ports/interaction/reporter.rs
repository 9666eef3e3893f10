use crate::domain::{
    models::StoredObject,
    value_objects::{BucketName, ObjectKey},
};

/// Operator-facing output of a cleanup run
pub trait CleanupReporter: Send + Sync {
    /// Called once with the full target list, before the confirmation gate
    fn deletion_targets(&self, bucket: &BucketName, targets: &[StoredObject]);

    /// Called after each successful delete
    fn object_deleted(&self, bucket: &BucketName, key: &ObjectKey);
}
