use crate::domain::value_objects::ObjectKey;

/// Failures reported by an object directory while listing or deleting.
///
/// Kept `Clone` so a cleanup run can hand the failing delete back to the
/// caller inside `CleanupError::DeletionFailed`.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Key vanished between listing and delete
    ObjectNotFound { key: ObjectKey },

    /// Credentials lack list or delete permission
    AccessDenied { key: ObjectKey, operation: String },

    /// Backend or bucket binding cannot serve the call
    UnsupportedOperation { operation: String, reason: String },

    /// Backend returned a path that is not a valid key
    ValidationError { message: String },

    /// Network, credential or provider failure
    InfrastructureError {
        message: String,
        source: Option<String>,
    },
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::ObjectNotFound { key } => {
                write!(f, "Object not found: {}", key)
            }
            StorageError::AccessDenied { key, operation } => {
                write!(
                    f,
                    "Access denied for operation '{}' on object: {}",
                    operation, key
                )
            }
            StorageError::UnsupportedOperation { operation, reason } => {
                write!(f, "Unsupported operation '{}': {}", operation, reason)
            }
            StorageError::ValidationError { message } => {
                write!(f, "Validation error: {}", message)
            }
            StorageError::InfrastructureError { message, .. } => {
                write!(f, "Infrastructure error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Result of an object directory call
pub type StorageResult<T> = Result<T, StorageError>;
