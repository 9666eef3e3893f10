use crate::domain::models::StoredObject;

/// Number of objects to delete so that `keep_last` survive
pub fn deletion_count(candidates: usize, keep_last: usize) -> usize {
    candidates.saturating_sub(keep_last)
}

/// Everything in front of the last `keep_last` sorted candidates.
///
/// An empty result means there are not more candidates than the retention
/// floor, which is a normal outcome rather than an error.
pub fn select_deletion_targets(
    mut sorted: Vec<StoredObject>,
    keep_last: usize,
) -> Vec<StoredObject> {
    let count = deletion_count(sorted.len(), keep_last);
    sorted.truncate(count);
    sorted
}
