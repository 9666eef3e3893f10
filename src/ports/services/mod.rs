mod cleanup_service;
mod object_service;

pub use cleanup_service::CleanupService;
pub use object_service::ObjectService;
