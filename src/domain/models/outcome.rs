use crate::domain::{models::StoredObject, value_objects::ObjectKey};

/// How a cleanup run ended when it did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Not more filtered candidates than the retention floor
    InsufficientCandidates { candidates: usize, keep_last: usize },

    /// Targets were computed and reported, nothing was deleted
    DryRun { targets: Vec<StoredObject> },

    /// Every target was deleted
    Completed { deleted: Vec<ObjectKey> },
}

impl RunOutcome {
    /// Number of objects removed by this run
    pub fn deleted_count(&self) -> usize {
        match self {
            RunOutcome::Completed { deleted } => deleted.len(),
            _ => 0,
        }
    }
}
