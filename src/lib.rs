pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core business entities and value objects
pub use domain::{
    // Value objects
    BucketName,
    // Models
    CleanupCriteria,
    // Errors
    CleanupError,
    CleanupFilter,
    CleanupPlan,
    ObjectKey,
    RunOutcome,
    SortDirection,
    SortKey,
    StorageError,
    StoredObject,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{
    CleanupReporter, CleanupService, ConfirmationPrompt, ObjectDirectory, ObjectService,
    PromptError,
};

// Service implementations - business logic
pub use services::{CleanupServiceImpl, ObjectServiceImpl};

// Application factory and configuration
pub use app::{create_in_memory_app, AppBuilder, AppConfig, AppError, AppServices, StorageBackend};

// Adapter types - infrastructure implementations
pub use adapters::outbound::{
    storage::ApacheObjectStoreAdapter,
    terminal::{ConsoleReporter, StdinPrompt},
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        create_in_memory_app, AppBuilder, AppServices, BucketName, CleanupCriteria,
        CleanupService, ObjectDirectory, ObjectKey, ObjectService, RunOutcome, SortDirection,
        SortKey,
    };
}
