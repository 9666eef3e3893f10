/// Interactive yes/no question put to the operator.
///
/// Deliberately synchronous: the call blocks until the operator answers,
/// with no timeout.
pub trait ConfirmationPrompt: Send + Sync {
    /// Show `message` and return the raw answer
    fn ask(&self, message: &str) -> Result<String, PromptError>;
}

/// Failures raised by a prompt implementation
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Failed to read confirmation: {0}")]
    Io(#[from] std::io::Error),

    #[error("Confirmation input closed before an answer was given")]
    Closed,
}
