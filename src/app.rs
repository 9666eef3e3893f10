use object_store::{memory::InMemory, ObjectStore as ApacheObjectStore};
use std::sync::Arc;

use crate::{
    adapters::outbound::{
        storage::{create_s3_store, ApacheObjectStoreAdapter, S3Config},
        terminal::{ConsoleReporter, StdinPrompt},
    },
    domain::value_objects::BucketName,
    ports::{
        interaction::{CleanupReporter, ConfirmationPrompt},
        storage::ObjectDirectory,
    },
    services::{CleanupServiceImpl, ObjectServiceImpl},
};

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bucket: BucketName,
    pub storage_backend: StorageBackend,
}

impl AppConfig {
    pub fn in_memory(bucket: BucketName) -> Self {
        Self {
            bucket,
            storage_backend: StorageBackend::InMemory,
        }
    }
}

/// Storage backend configuration
#[derive(Debug, Clone)]
pub enum StorageBackend {
    InMemory,
    S3 {
        region: String,
        access_key: Option<String>,
        secret_key: Option<String>,
    },
    MinIO {
        endpoint: String,
        region: String,
        access_key: String,
        secret_key: String,
        use_ssl: bool,
    },
}

impl StorageBackend {
    fn s3_config(&self, bucket: &BucketName) -> Option<S3Config> {
        match self {
            StorageBackend::InMemory => None,
            StorageBackend::S3 {
                region,
                access_key,
                secret_key,
            } => Some(S3Config {
                bucket: bucket.to_string(),
                region: region.clone(),
                access_key: access_key.clone(),
                secret_key: secret_key.clone(),
                endpoint: None,
                allow_http: false,
            }),
            StorageBackend::MinIO {
                endpoint,
                region,
                access_key,
                secret_key,
                use_ssl,
            } => Some(S3Config {
                bucket: bucket.to_string(),
                region: region.clone(),
                access_key: Some(access_key.clone()),
                secret_key: Some(secret_key.clone()),
                endpoint: Some(endpoint.clone()),
                allow_http: !use_ssl,
            }),
        }
    }
}

/// Application services container
pub struct AppServices {
    pub bucket: BucketName,
    pub object_service: ObjectServiceImpl,
    pub cleanup_service: CleanupServiceImpl,
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
    store: Option<Arc<dyn ApacheObjectStore>>,
    prompt: Option<Arc<dyn ConfirmationPrompt>>,
    reporter: Option<Arc<dyn CleanupReporter>>,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            store: None,
            prompt: None,
            reporter: None,
        }
    }

    /// Use an already constructed store instead of the configured backend
    pub fn with_object_store(mut self, store: Arc<dyn ApacheObjectStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the stdin confirmation prompt
    pub fn with_prompt(mut self, prompt: Arc<dyn ConfirmationPrompt>) -> Self {
        self.prompt = Some(prompt);
        self
    }

    /// Replace the stdout cleanup reporter
    pub fn with_reporter(mut self, reporter: Arc<dyn CleanupReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Build the complete application with services
    pub fn build(self) -> Result<AppServices, AppError> {
        let directory = self.create_directory()?;

        let prompt = self
            .prompt
            .unwrap_or_else(|| Arc::new(StdinPrompt::new()) as Arc<dyn ConfirmationPrompt>);
        let reporter = self
            .reporter
            .unwrap_or_else(|| Arc::new(ConsoleReporter::stdout()) as Arc<dyn CleanupReporter>);

        Ok(AppServices {
            bucket: self.config.bucket,
            object_service: ObjectServiceImpl::new(directory.clone()),
            cleanup_service: CleanupServiceImpl::new(directory, prompt, reporter),
        })
    }

    /// Create the object directory based on configuration
    fn create_directory(&self) -> Result<Arc<dyn ObjectDirectory>, AppError> {
        let s3_config = self.config.storage_backend.s3_config(&self.config.bucket);
        let store = match (&self.store, s3_config) {
            (Some(store), _) => store.clone(),
            (None, None) => Arc::new(InMemory::new()) as Arc<dyn ApacheObjectStore>,
            (None, Some(s3_config)) => {
                create_s3_store(&s3_config).map_err(|e| AppError::StorageInit {
                    message: format!("{:#}", e),
                })?
            }
        };

        Ok(Arc::new(ApacheObjectStoreAdapter::new(
            store,
            self.config.bucket.clone(),
        )))
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Storage initialization error: {message}")]
    StorageInit { message: String },
}

/// Create an in-memory application for testing and development
pub fn create_in_memory_app(bucket: BucketName) -> Result<AppServices, AppError> {
    AppBuilder::new(AppConfig::in_memory(bucket)).build()
}
