mod prompt;
mod reporter;

pub use prompt::{ConfirmationPrompt, PromptError};
pub use reporter::CleanupReporter;
