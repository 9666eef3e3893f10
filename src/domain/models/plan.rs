use crate::domain::models::{
    select_deletion_targets, sort_objects, CleanupCriteria, CleanupFilter, StoredObject,
};

/// Result of filtering, sorting and retention selection over one listing
#[derive(Debug, Clone, PartialEq)]
pub struct CleanupPlan {
    /// Objects that passed the filter
    pub candidates: usize,
    /// Prefix of the sorted candidates that falls outside the retention floor
    pub targets: Vec<StoredObject>,
}

impl CleanupPlan {
    /// Filter, sort and select. Pure, so the same listing always yields the same plan.
    pub fn build(listing: Vec<StoredObject>, criteria: &CleanupCriteria) -> Self {
        let mut candidates = CleanupFilter::from_criteria(criteria).apply(listing);
        sort_objects(&mut candidates, criteria.sort_key, criteria.sort_direction);

        let count = candidates.len();
        Self {
            candidates: count,
            targets: select_deletion_targets(candidates, criteria.keep_last),
        }
    }

    pub fn has_targets(&self) -> bool {
        !self.targets.is_empty()
    }
}
