pub mod interaction;
pub mod services;
pub mod storage;

// Re-export all port traits for convenience
pub use interaction::{CleanupReporter, ConfirmationPrompt, PromptError};
pub use services::{CleanupService, ObjectService};
pub use storage::ObjectDirectory;
