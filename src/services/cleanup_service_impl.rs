use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::{
    domain::{
        errors::{CleanupError, CleanupResult},
        models::{CleanupCriteria, CleanupPlan, RunOutcome, StoredObject},
        value_objects::{BucketName, ObjectKey},
    },
    ports::{
        interaction::{CleanupReporter, ConfirmationPrompt},
        services::CleanupService,
        storage::ObjectDirectory,
    },
    services::confirmation_gate::{confirmation_gate, GateDecision},
};

/// Retention cleanup engine
#[derive(Clone)]
pub struct CleanupServiceImpl {
    directory: Arc<dyn ObjectDirectory>,
    prompt: Arc<dyn ConfirmationPrompt>,
    reporter: Arc<dyn CleanupReporter>,
}

impl CleanupServiceImpl {
    pub fn new(
        directory: Arc<dyn ObjectDirectory>,
        prompt: Arc<dyn ConfirmationPrompt>,
        reporter: Arc<dyn CleanupReporter>,
    ) -> Self {
        Self {
            directory,
            prompt,
            reporter,
        }
    }

    /// Run the gate on the blocking pool since the prompt may wait on stdin
    async fn confirm(
        &self,
        criteria: &CleanupCriteria,
        target_count: usize,
    ) -> CleanupResult<GateDecision> {
        let criteria = criteria.clone();
        let prompt = Arc::clone(&self.prompt);

        tokio::task::spawn_blocking(move || {
            confirmation_gate(&criteria, target_count, prompt.as_ref())
        })
        .await
        .map_err(|e| CleanupError::InvalidConfirmation {
            reason: format!("confirmation task failed: {}", e),
        })?
    }

    /// Delete targets one at a time in selection order, stopping at the first failure.
    /// Nothing already deleted is restored.
    async fn delete_targets(
        &self,
        bucket: &BucketName,
        targets: Vec<StoredObject>,
    ) -> CleanupResult<Vec<ObjectKey>> {
        let mut deleted = Vec::with_capacity(targets.len());

        for target in targets {
            if let Err(source) = self.directory.delete_object(bucket, &target.key).await {
                error!(
                    bucket = %bucket,
                    key = %target.key,
                    deleted = deleted.len(),
                    "Delete failed, aborting cleanup: {}",
                    source
                );
                return Err(CleanupError::DeletionFailed {
                    key: target.key,
                    deleted: deleted.len(),
                    source,
                });
            }

            info!(bucket = %bucket, key = %target.key, "Deleted object");
            self.reporter.object_deleted(bucket, &target.key);
            deleted.push(target.key);
        }

        Ok(deleted)
    }
}

#[async_trait]
impl CleanupService for CleanupServiceImpl {
    async fn plan_cleanup(&self, criteria: &CleanupCriteria) -> CleanupResult<CleanupPlan> {
        criteria.validate()?;

        let listing = self
            .directory
            .list_objects(&criteria.bucket, criteria.listing_prefix())
            .await
            .map_err(CleanupError::Listing)?;

        debug!(
            bucket = %criteria.bucket,
            prefix = %criteria.prefix,
            listed = listing.len(),
            "Listed objects for cleanup"
        );

        let plan = CleanupPlan::build(listing, criteria);

        debug!(
            candidates = plan.candidates,
            targets = plan.targets.len(),
            sort_key = %criteria.sort_key,
            sort_direction = %criteria.sort_direction,
            "Computed cleanup plan"
        );

        Ok(plan)
    }

    async fn run_cleanup(&self, criteria: CleanupCriteria) -> CleanupResult<RunOutcome> {
        let plan = self.plan_cleanup(&criteria).await?;

        if !plan.has_targets() {
            warn!(
                "Not enough objects to clean up in bucket '{}': {} candidate(s), keeping last {}",
                criteria.bucket, plan.candidates, criteria.keep_last
            );
            return Ok(RunOutcome::InsufficientCandidates {
                candidates: plan.candidates,
                keep_last: criteria.keep_last,
            });
        }

        self.reporter
            .deletion_targets(&criteria.bucket, &plan.targets);

        match self.confirm(&criteria, plan.targets.len()).await? {
            GateDecision::DryRun => Ok(RunOutcome::DryRun {
                targets: plan.targets,
            }),
            GateDecision::Proceed => {
                let deleted = self.delete_targets(&criteria.bucket, plan.targets).await?;
                info!(
                    bucket = %criteria.bucket,
                    deleted = deleted.len(),
                    "Cleanup completed"
                );
                Ok(RunOutcome::Completed { deleted })
            }
        }
    }
}
