use crate::domain::{
    errors::{StorageError, ValidationError},
    value_objects::ObjectKey,
};

/// Errors that abort a retention cleanup run
#[derive(Debug, thiserror::Error)]
pub enum CleanupError {
    /// Criteria rejected before the listing call
    #[error("Invalid cleanup criteria: {0}")]
    InvalidCriteria(#[from] ValidationError),

    /// Listing failed; surfaced as reported by the object directory
    #[error(transparent)]
    Listing(StorageError),

    /// The operator answered "no"
    #[error("Cleanup declined by user")]
    Declined,

    /// The operator answered something other than yes/no, or the prompt failed
    #[error("Invalid confirmation input: {reason}")]
    InvalidConfirmation { reason: String },

    /// A delete call failed; objects deleted before it stay deleted
    #[error("Failed to delete '{key}' after {deleted} successful deletion(s): {source}")]
    DeletionFailed {
        key: ObjectKey,
        deleted: usize,
        #[source]
        source: StorageError,
    },
}

/// Result type for cleanup runs
pub type CleanupResult<T> = Result<T, CleanupError>;
