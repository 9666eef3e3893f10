use bucket_manager::{
    domain::models::megabytes_to_bytes, AppBuilder, AppConfig, BucketName, CleanupCriteria,
    CleanupError, CleanupReporter, CleanupService, ConfirmationPrompt, ObjectKey, ObjectService,
    PromptError, RunOutcome, SortDirection, SortKey, StoredObject,
};
use bytes::Bytes;
use object_store::{memory::InMemory, path::Path, ObjectStore, PutPayload};
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct ScriptedPrompt {
    answer: &'static str,
    questions: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    fn new(answer: &'static str) -> Arc<Self> {
        Arc::new(Self {
            answer,
            questions: Mutex::new(Vec::new()),
        })
    }
}

impl ConfirmationPrompt for ScriptedPrompt {
    fn ask(&self, message: &str) -> Result<String, PromptError> {
        self.questions.lock().unwrap().push(message.to_string());
        Ok(self.answer.to_string())
    }
}

#[derive(Default)]
struct RecordingReporter {
    targets: Mutex<Vec<String>>,
    deleted: Mutex<Vec<String>>,
}

impl CleanupReporter for RecordingReporter {
    fn deletion_targets(&self, _bucket: &BucketName, targets: &[StoredObject]) {
        let mut recorded = self.targets.lock().unwrap();
        recorded.extend(targets.iter().map(|t| t.key.to_string()));
    }

    fn object_deleted(&self, _bucket: &BucketName, key: &ObjectKey) {
        self.deleted.lock().unwrap().push(key.to_string());
    }
}

fn bucket() -> BucketName {
    BucketName::new("cleanup-bucket").unwrap()
}

/// Put objects one after another so their last-modified times increase
async fn seed(store: &InMemory, objects: &[(&str, usize)]) {
    for (key, size) in objects {
        store
            .put(&Path::from(*key), PutPayload::from(Bytes::from(vec![0u8; *size])))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

struct Harness {
    prompt: Arc<ScriptedPrompt>,
    reporter: Arc<RecordingReporter>,
    services: bucket_manager::AppServices,
}

async fn harness(objects: &[(&str, usize)], answer: &'static str) -> Harness {
    let store = Arc::new(InMemory::new());
    seed(&store, objects).await;

    let prompt = ScriptedPrompt::new(answer);
    let reporter = Arc::new(RecordingReporter::default());

    let services = AppBuilder::new(AppConfig::in_memory(bucket()))
        .with_object_store(store.clone())
        .with_prompt(prompt.clone())
        .with_reporter(reporter.clone())
        .build()
        .unwrap();

    Harness {
        prompt,
        reporter,
        services,
    }
}

async fn remaining_keys(harness: &Harness) -> Vec<String> {
    harness
        .services
        .object_service
        .list_objects(&bucket(), None)
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.key.to_string())
        .collect()
}

fn criteria(keep_last: usize) -> CleanupCriteria {
    CleanupCriteria::builder()
        .bucket(bucket())
        .keep_last(keep_last)
        .sort_key(SortKey::LastModified)
        .sort_direction(SortDirection::Ascending)
        .build()
}

const THREE_FILES: &[(&str, usize)] = &[
    ("file1.txt", 1000),
    ("file2.txt", 2000),
    ("file3.txt", 3000),
];

#[tokio::test]
async fn test_keep_last_two_deletes_the_oldest() {
    let h = harness(THREE_FILES, "y").await;

    let outcome = h
        .services
        .cleanup_service
        .run_cleanup(criteria(2))
        .await
        .unwrap();

    assert_eq!(outcome.deleted_count(), 1);
    assert_eq!(remaining_keys(&h).await, vec!["file2.txt", "file3.txt"]);
    assert_eq!(*h.reporter.targets.lock().unwrap(), vec!["file1.txt"]);
    assert_eq!(*h.reporter.deleted.lock().unwrap(), vec!["file1.txt"]);
    assert_eq!(h.prompt.questions.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_retention_floor_above_listing_is_a_no_op() {
    let h = harness(THREE_FILES, "y").await;

    let outcome = h
        .services
        .cleanup_service
        .run_cleanup(criteria(300))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        RunOutcome::InsufficientCandidates {
            candidates: 3,
            keep_last: 300
        }
    );
    assert_eq!(remaining_keys(&h).await.len(), 3);
    assert!(h.prompt.questions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_dry_run_reports_but_keeps_everything() {
    let h = harness(THREE_FILES, "y").await;

    let mut c = criteria(0);
    c.dry_run = true;

    let outcome = h.services.cleanup_service.run_cleanup(c).await.unwrap();

    match outcome {
        RunOutcome::DryRun { targets } => assert_eq!(targets.len(), 3),
        other => panic!("Expected dry run, got {:?}", other),
    }
    assert_eq!(remaining_keys(&h).await.len(), 3);
    assert_eq!(h.reporter.targets.lock().unwrap().len(), 3);
    assert!(h.reporter.deleted.lock().unwrap().is_empty());
    assert!(h.prompt.questions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_operator_decline_keeps_everything() {
    let h = harness(THREE_FILES, "n").await;

    let result = h.services.cleanup_service.run_cleanup(criteria(1)).await;

    assert!(matches!(result, Err(CleanupError::Declined)));
    assert_eq!(remaining_keys(&h).await.len(), 3);
    // targets are still shown before the question
    assert_eq!(h.reporter.targets.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_operator_approval_deletes_all_targets() {
    let h = harness(THREE_FILES, "y").await;

    let outcome = h
        .services
        .cleanup_service
        .run_cleanup(criteria(0))
        .await
        .unwrap();

    assert_eq!(outcome.deleted_count(), 3);
    assert!(remaining_keys(&h).await.is_empty());
}

#[tokio::test]
async fn test_auto_approve_never_prompts() {
    let h = harness(THREE_FILES, "n").await;

    let mut c = criteria(1);
    c.auto_approve = true;

    let outcome = h.services.cleanup_service.run_cleanup(c).await.unwrap();

    assert_eq!(outcome.deleted_count(), 2);
    assert_eq!(remaining_keys(&h).await, vec!["file3.txt"]);
    assert!(h.prompt.questions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_extension_and_prefix_filters() {
    let h = harness(
        &[
            ("db/dump-1.sql", 10),
            ("db/dump-2.sql", 10),
            ("db/notes.txt", 10),
            ("db/dump-3.SQL", 10),
            ("web/dump-4.sql", 10),
        ],
        "y",
    )
    .await;

    let c = CleanupCriteria::builder()
        .bucket(bucket())
        .prefix("db")
        .file_extensions(["sql".to_string()].into_iter().collect())
        .keep_last(1)
        .auto_approve(true)
        .build();

    let outcome = h.services.cleanup_service.run_cleanup(c).await.unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Completed {
            deleted: vec![ObjectKey::new("db/dump-1.sql").unwrap()]
        }
    );
    assert_eq!(
        remaining_keys(&h).await,
        vec!["db/dump-2.sql", "db/dump-3.SQL", "db/notes.txt", "web/dump-4.sql"]
    );
}

#[tokio::test]
async fn test_size_window_in_megabytes() {
    let fifteen = megabytes_to_bytes(15) as usize;
    let twenty_five = megabytes_to_bytes(25) as usize;
    let h = harness(&[("mid.bin", fifteen), ("big.bin", twenty_five)], "y").await;

    let c = CleanupCriteria::builder()
        .bucket(bucket())
        .min_size_bytes(megabytes_to_bytes(10))
        .max_size_bytes(megabytes_to_bytes(20))
        .keep_last(0)
        .dry_run(true)
        .build();

    let plan = h.services.cleanup_service.plan_cleanup(&c).await.unwrap();

    assert_eq!(plan.candidates, 1);
    assert_eq!(plan.targets[0].key.as_str(), "mid.bin");
}

#[tokio::test]
async fn test_sort_by_size_descending_keeps_smallest() {
    let h = harness(
        &[("small.bin", 10), ("large.bin", 300), ("medium.bin", 200)],
        "y",
    )
    .await;

    let c = CleanupCriteria::builder()
        .bucket(bucket())
        .keep_last(1)
        .sort_key(SortKey::Size)
        .sort_direction(SortDirection::Descending)
        .auto_approve(true)
        .build();

    h.services.cleanup_service.run_cleanup(c).await.unwrap();

    // largest objects are deleted first
    assert_eq!(
        *h.reporter.deleted.lock().unwrap(),
        vec!["large.bin", "medium.bin"]
    );
    assert_eq!(remaining_keys(&h).await, vec!["small.bin"]);
}

#[tokio::test]
async fn test_invalid_size_range_never_lists() {
    let h = harness(THREE_FILES, "y").await;

    let c = CleanupCriteria::builder()
        .bucket(bucket())
        .min_size_bytes(megabytes_to_bytes(30))
        .max_size_bytes(megabytes_to_bytes(20))
        .keep_last(0)
        .auto_approve(true)
        .build();

    let result = h.services.cleanup_service.run_cleanup(c).await;

    assert!(matches!(result, Err(CleanupError::InvalidCriteria(_))));
    assert_eq!(remaining_keys(&h).await.len(), 3);
}

#[tokio::test]
async fn test_prefix_ending_mid_segment() {
    let h = harness(
        &[
            ("backup-2024-01.tar", 10),
            ("backup-2024-02.tar", 10),
            ("backup-2024-03.tar", 10),
            ("logs/app.log", 10),
        ],
        "y",
    )
    .await;

    let c = CleanupCriteria::builder()
        .bucket(bucket())
        .prefix("backup-")
        .keep_last(1)
        .auto_approve(true)
        .build();

    let outcome = h.services.cleanup_service.run_cleanup(c).await.unwrap();

    assert_eq!(outcome.deleted_count(), 2);
    assert_eq!(
        remaining_keys(&h).await,
        vec!["backup-2024-03.tar", "logs/app.log"]
    );
}

#[tokio::test]
async fn test_folder_markers_are_never_targets() {
    let h = harness(
        &[
            ("backups/", 0),
            ("backups/old.log", 10),
            ("backups/new.log", 10),
        ],
        "y",
    )
    .await;

    let mut c = criteria(1);
    c.auto_approve = true;

    let outcome = h.services.cleanup_service.run_cleanup(c).await.unwrap();

    // the marker takes no retention slot and survives the run
    assert_eq!(
        outcome,
        RunOutcome::Completed {
            deleted: vec![ObjectKey::new("backups/old.log").unwrap()]
        }
    );
    assert_eq!(remaining_keys(&h).await, vec!["backups/", "backups/new.log"]);
}
