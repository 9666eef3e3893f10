use anyhow::{Context, Result};
use bucket_manager::{
    app::{AppBuilder, AppConfig, StorageBackend},
    domain::models::megabytes_to_bytes,
    BucketName, CleanupCriteria, CleanupService, ObjectKey, ObjectService, RunOutcome,
    SortDirection, SortKey, StoredObject,
};
use clap::{Args, Parser, Subcommand};
use std::collections::BTreeSet;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "bucket-manager")]
#[command(about = "Manage the content of an S3-compatible bucket", long_about = None)]
struct Cli {
    /// Bucket name
    #[arg(short, long, env = "S3_BUCKET")]
    bucket: String,

    /// Storage backend type (s3, minio, memory)
    #[arg(long, env = "STORAGE_BACKEND", default_value = "s3")]
    storage_backend: String,

    /// S3 endpoint URL (MinIO backend)
    #[arg(long, env = "S3_ENDPOINT")]
    s3_endpoint: Option<String>,

    /// S3 region
    #[arg(long, env = "S3_REGION", default_value = "us-east-1")]
    s3_region: String,

    /// S3 access key
    #[arg(long, env = "S3_ACCESS_KEY")]
    s3_access_key: Option<String>,

    /// S3 secret key
    #[arg(long, env = "S3_SECRET_KEY")]
    s3_secret_key: Option<String>,

    /// Use SSL for MinIO connection
    #[arg(long, env = "MINIO_USE_SSL", default_value = "false")]
    minio_use_ssl: bool,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List objects
    List {
        /// Prefix to filter objects
        #[arg(short, long)]
        prefix: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Find objects whose key contains a pattern
    Search {
        /// Case-sensitive substring to look for
        pattern: String,
        /// Prefix to narrow the listing
        #[arg(short, long)]
        prefix: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Delete an object
    Delete {
        /// Object key
        key: String,
    },

    /// Delete everything but the last N matching objects
    Cleanup(CleanupArgs),
}

#[derive(Args, Debug)]
struct CleanupArgs {
    /// Only consider objects under this prefix
    #[arg(short, long, default_value = "")]
    prefix: String,

    /// File extension to match, case-sensitive (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Minimum object size in MB (0 = no minimum)
    #[arg(long, default_value_t = 0)]
    min_size_mb: u64,

    /// Maximum object size in MB (0 = no maximum)
    #[arg(long, default_value_t = 0)]
    max_size_mb: u64,

    /// Number of objects to keep at the end of the sort order
    #[arg(long)]
    keep_last: usize,

    /// Sort key: lastModificationDate or size
    #[arg(long, default_value = "lastModificationDate")]
    sort_by: String,

    /// Sort order: asc or desc (anything else sorts ascending)
    #[arg(long)]
    order: Option<String>,

    /// Print what would be deleted without deleting
    #[arg(long)]
    dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(long)]
    auto_approve: bool,
}

impl CleanupArgs {
    fn to_criteria(&self, bucket: BucketName) -> Result<CleanupCriteria> {
        let sort_key: SortKey = self.sort_by.parse()?;

        let file_extensions: BTreeSet<String> = self
            .extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();

        let criteria = CleanupCriteria::builder()
            .bucket(bucket)
            .prefix(self.prefix.clone())
            .file_extensions(file_extensions)
            .min_size_bytes(megabytes_to_bytes(self.min_size_mb))
            .max_size_bytes(megabytes_to_bytes(self.max_size_mb))
            .keep_last(self.keep_last)
            .sort_key(sort_key)
            .sort_direction(SortDirection::parse_or_default(self.order.as_deref()))
            .dry_run(self.dry_run)
            .auto_approve(self.auto_approve)
            .build();

        criteria.validate()?;
        Ok(criteria)
    }
}

impl Cli {
    fn to_app_config(&self) -> Result<AppConfig> {
        let bucket = BucketName::new(self.bucket.clone()).context("Invalid bucket name")?;

        let storage_backend = match self.storage_backend.as_str() {
            "memory" => StorageBackend::InMemory,
            "s3" => StorageBackend::S3 {
                region: self.s3_region.clone(),
                access_key: self.s3_access_key.clone(),
                secret_key: self.s3_secret_key.clone(),
            },
            "minio" => {
                let endpoint = self
                    .s3_endpoint
                    .clone()
                    .context("S3_ENDPOINT is required for MinIO backend")?;
                let access_key = self
                    .s3_access_key
                    .clone()
                    .context("S3_ACCESS_KEY is required for MinIO backend")?;
                let secret_key = self
                    .s3_secret_key
                    .clone()
                    .context("S3_SECRET_KEY is required for MinIO backend")?;

                StorageBackend::MinIO {
                    endpoint,
                    region: self.s3_region.clone(),
                    access_key,
                    secret_key,
                    use_ssl: self.minio_use_ssl,
                }
            }
            _ => anyhow::bail!("Unknown storage backend: {}", self.storage_backend),
        };

        Ok(AppConfig {
            bucket,
            storage_backend,
        })
    }

    fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.log_level.to_lowercase()));

        // stdout carries command output, logs go to stderr
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_objects(objects: &[StoredObject], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(objects)?);
        return Ok(());
    }

    for object in objects {
        println!(
            "{}  {:>12}  {}",
            object.last_modified.to_rfc3339(),
            object.size,
            object.key
        );
    }
    Ok(())
}

fn print_outcome(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::InsufficientCandidates {
            candidates,
            keep_last,
        } => println!(
            "Nothing to clean up: {} matching object(s), keeping last {}",
            candidates, keep_last
        ),
        RunOutcome::DryRun { targets } => {
            println!("Dry run: {} object(s) would be deleted", targets.len())
        }
        RunOutcome::Completed { deleted } => println!("Deleted {} object(s)", deleted.len()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging();

    info!("Storage backend: {}", cli.storage_backend);

    let config = cli.to_app_config()?;
    let services = AppBuilder::new(config)
        .build()
        .context("Failed to build application")?;
    let bucket = services.bucket.clone();

    match &cli.command {
        Commands::List { prefix, json } => {
            let objects = services
                .object_service
                .list_objects(&bucket, prefix.as_deref())
                .await?;
            print_objects(&objects, *json)?;
        }
        Commands::Search {
            pattern,
            prefix,
            json,
        } => {
            let objects = services
                .object_service
                .search_objects(&bucket, prefix.as_deref(), pattern)
                .await?;
            print_objects(&objects, *json)?;
        }
        Commands::Delete { key } => {
            let key = ObjectKey::new(key.clone()).context("Invalid object key")?;
            services.object_service.delete_object(&bucket, &key).await?;
            println!("Deleted: {}", key);
        }
        Commands::Cleanup(args) => {
            let criteria = args.to_criteria(bucket)?;
            let outcome = services.cleanup_service.run_cleanup(criteria).await?;
            print_outcome(&outcome);
        }
    }

    Ok(())
}
