use tracing::{debug, info};

use crate::{
    domain::{
        errors::{CleanupError, CleanupResult},
        models::CleanupCriteria,
    },
    ports::interaction::ConfirmationPrompt,
};

/// What the gate allows a run to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Stop after reporting targets
    DryRun,
    /// Go ahead and delete
    Proceed,
}

/// Decide whether identified targets may be deleted.
///
/// Dry run wins over auto-approve. Without either flag the operator is
/// asked once through `prompt`.
pub fn confirmation_gate(
    criteria: &CleanupCriteria,
    target_count: usize,
    prompt: &dyn ConfirmationPrompt,
) -> CleanupResult<GateDecision> {
    if criteria.dry_run {
        info!(
            bucket = %criteria.bucket,
            targets = target_count,
            "Dry run, skipping deletion"
        );
        return Ok(GateDecision::DryRun);
    }

    if criteria.auto_approve {
        debug!("Auto-approve enabled, skipping confirmation");
        return Ok(GateDecision::Proceed);
    }

    let message = format!(
        "Delete {} object(s) from bucket '{}'? (y/n)",
        target_count, criteria.bucket
    );
    let answer = prompt
        .ask(&message)
        .map_err(|e| CleanupError::InvalidConfirmation {
            reason: e.to_string(),
        })?;

    interpret_answer(&answer)?;
    Ok(GateDecision::Proceed)
}

/// `y`/`yes` approves, `n`/`no` declines, anything else is invalid
pub fn interpret_answer(answer: &str) -> CleanupResult<()> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(()),
        "n" | "no" => Err(CleanupError::Declined),
        other => Err(CleanupError::InvalidConfirmation {
            reason: format!("expected 'y' or 'n', got {:?}", other),
        }),
    }
}
