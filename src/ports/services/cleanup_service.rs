use crate::domain::{
    errors::CleanupResult,
    models::{CleanupCriteria, CleanupPlan, RunOutcome},
};
use async_trait::async_trait;

/// Service port for retention cleanup
#[async_trait]
pub trait CleanupService: Send + Sync + 'static {
    /// Compute what a run would delete without reporting, prompting or deleting
    async fn plan_cleanup(&self, criteria: &CleanupCriteria) -> CleanupResult<CleanupPlan>;

    /// Run the full pipeline: list, filter, sort, select, confirm, delete
    async fn run_cleanup(&self, criteria: CleanupCriteria) -> CleanupResult<RunOutcome>;
}
