use std::collections::BTreeSet;

use crate::domain::models::{CleanupCriteria, StoredObject};

/// Candidate filter for retention cleanup
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CleanupFilter {
    /// Extensions (no leading dot) the key must end with; empty matches all
    pub extensions: BTreeSet<String>,
    /// Object size must be at least this many bytes
    pub min_size: Option<u64>,
    /// Object size must be at most this many bytes
    pub max_size: Option<u64>,
}

impl CleanupFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the extension and size rules from the run criteria; a zero bound means unbounded
    pub fn from_criteria(criteria: &CleanupCriteria) -> Self {
        Self {
            extensions: criteria.file_extensions.clone(),
            min_size: (criteria.min_size_bytes > 0).then_some(criteria.min_size_bytes),
            max_size: (criteria.max_size_bytes > 0).then_some(criteria.max_size_bytes),
        }
    }

    /// Check if this filter matches an object
    pub fn matches(&self, object: &StoredObject) -> bool {
        // Directory markers are never cleanup candidates
        if object.key.is_directory_marker() {
            return false;
        }

        if !self.extensions.is_empty()
            && !self
                .extensions
                .iter()
                .any(|ext| object.key.has_extension(ext))
        {
            return false;
        }

        if let Some(min_size) = self.min_size {
            if object.size < min_size {
                return false;
            }
        }

        if let Some(max_size) = self.max_size {
            if object.size > max_size {
                return false;
            }
        }

        true
    }

    /// Keep the matching objects, preserving listing order
    pub fn apply(&self, objects: Vec<StoredObject>) -> Vec<StoredObject> {
        objects.into_iter().filter(|o| self.matches(o)).collect()
    }
}
