use crate::domain::{errors::StorageError, value_objects::ObjectKey};

/// Convert object_store errors to domain storage errors
impl From<object_store::Error> for StorageError {
    fn from(err: object_store::Error) -> Self {
        match err {
            object_store::Error::NotFound { path, .. } => {
                // Try to create ObjectKey, fallback to validation error if invalid
                match ObjectKey::new(path.clone()) {
                    Ok(key) => StorageError::ObjectNotFound { key },
                    Err(_) => StorageError::ValidationError {
                        message: format!("Invalid object path from store: {}", path),
                    },
                }
            }
            object_store::Error::PermissionDenied { path, .. }
            | object_store::Error::Unauthenticated { path, .. } => {
                match ObjectKey::new(path.clone()) {
                    Ok(key) => StorageError::AccessDenied {
                        key,
                        operation: "unknown".to_string(),
                    },
                    Err(_) => StorageError::InfrastructureError {
                        message: format!("Access denied for path: {}", path),
                        source: None,
                    },
                }
            }
            object_store::Error::NotSupported { .. } | object_store::Error::NotImplemented => {
                StorageError::UnsupportedOperation {
                    operation: "unknown".to_string(),
                    reason: err.to_string(),
                }
            }
            _ => StorageError::InfrastructureError {
                message: format!("Object store operation failed: {}", err),
                source: Some(err.to_string()),
            },
        }
    }
}
