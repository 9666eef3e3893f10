use std::cmp::Ordering;

use crate::domain::models::{SortDirection, SortKey, StoredObject};

/// Stable in-place sort of cleanup candidates.
///
/// Ascending puts the oldest/smallest object first. Objects that compare
/// equal keep their listing order in both directions.
pub fn sort_objects(objects: &mut [StoredObject], key: SortKey, direction: SortDirection) {
    objects.sort_by(|a, b| {
        let ordering = compare_by(a, b, key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare_by(a: &StoredObject, b: &StoredObject, key: SortKey) -> Ordering {
    match key {
        SortKey::LastModified => a.last_modified.cmp(&b.last_modified),
        SortKey::Size => a.size.cmp(&b.size),
    }
}
