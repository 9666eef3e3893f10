use std::collections::BTreeSet;
use std::str::FromStr;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::domain::{errors::ValidationError, value_objects::BucketName};

/// Size criteria are entered in megabytes and compared in bytes
pub const BYTES_PER_MEGABYTE: u64 = 1024 * 1024;

/// Convert a megabyte count from the configuration boundary into bytes
pub fn megabytes_to_bytes(megabytes: u64) -> u64 {
    megabytes.saturating_mul(BYTES_PER_MEGABYTE)
}

/// Attribute used to order cleanup candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    LastModified,
    Size,
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lastmodificationdate" | "lastmodified" | "last-modified" | "last_modified" => {
                Ok(SortKey::LastModified)
            }
            "size" => Ok(SortKey::Size),
            _ => Err(ValidationError::UnknownSortKey(s.to_string())),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::LastModified => write!(f, "lastModificationDate"),
            SortKey::Size => write!(f, "size"),
        }
    }
}

/// Sort direction; anything that is not a descending keyword sorts ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("desc") | Some("descending") => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

/// Everything a single retention cleanup run needs to know.
///
/// Built fresh for every run and handed to the cleanup service by value.
/// Call [`CleanupCriteria::validate`] (the service does) before listing.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct CleanupCriteria {
    pub bucket: BucketName,

    /// Restricts the listing call
    #[builder(default, into)]
    pub prefix: String,

    /// Case-sensitive extensions without the leading dot; empty matches all
    #[builder(default)]
    pub file_extensions: BTreeSet<String>,

    /// 0 = unbounded
    #[builder(default)]
    pub min_size_bytes: u64,

    /// 0 = unbounded
    #[builder(default)]
    pub max_size_bytes: u64,

    /// Number of objects at the end of the sort order that survive
    pub keep_last: usize,

    #[builder(default)]
    pub sort_key: SortKey,

    #[builder(default)]
    pub sort_direction: SortDirection,

    #[builder(default)]
    pub dry_run: bool,

    #[builder(default)]
    pub auto_approve: bool,
}

impl CleanupCriteria {
    /// Reject criteria that can never select anything sensible
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_size_bytes > 0
            && self.max_size_bytes > 0
            && self.min_size_bytes > self.max_size_bytes
        {
            return Err(ValidationError::MinSizeExceedsMaxSize {
                min_bytes: self.min_size_bytes,
                max_bytes: self.max_size_bytes,
            });
        }

        if self.file_extensions.iter().any(|ext| ext.is_empty()) {
            return Err(ValidationError::EmptyFileExtension);
        }

        Ok(())
    }

    /// Listing prefix, `None` when the whole bucket is in scope
    pub fn listing_prefix(&self) -> Option<&str> {
        if self.prefix.is_empty() {
            None
        } else {
            Some(self.prefix.as_str())
        }
    }
}
