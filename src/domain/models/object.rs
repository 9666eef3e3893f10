use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ObjectKey;

/// Snapshot of one object as returned by a bucket listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredObject {
    pub key: ObjectKey,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
    /// Informational only. `object_store` listings never carry it, so it
    /// stays `None` for objects read through the storage adapter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
}

impl StoredObject {
    pub fn new(key: ObjectKey, size: u64, last_modified: DateTime<Utc>) -> Self {
        Self {
            key,
            size,
            last_modified,
            storage_class: None,
            e_tag: None,
        }
    }
}
