use bucket_manager::{
    create_in_memory_app, ports::services::ObjectService, AppBuilder, AppConfig, AppServices,
    BucketName, ObjectKey, StorageError,
};
use bytes::Bytes;
use object_store::{memory::InMemory, path::Path, ObjectStore, PutPayload};
use std::sync::Arc;

async fn app_with(keys: &[&str]) -> (BucketName, AppServices) {
    let store = Arc::new(InMemory::new());
    for key in keys {
        store
            .put(&Path::from(*key), PutPayload::from(Bytes::from(key.to_string())))
            .await
            .unwrap();
    }

    let bucket = BucketName::new("basic-bucket").unwrap();
    let services = AppBuilder::new(AppConfig::in_memory(bucket.clone()))
        .with_object_store(store)
        .build()
        .unwrap();
    (bucket, services)
}

#[tokio::test]
async fn basic_list() {
    let (bucket, services) = app_with(&["logs/a.log", "logs/b.log", "data/c.csv"]).await;

    let all = services
        .object_service
        .list_objects(&bucket, None)
        .await
        .unwrap();
    assert_eq!(all.len(), 3);

    let logs = services
        .object_service
        .list_objects(&bucket, Some("logs"))
        .await
        .unwrap();
    let keys: Vec<_> = logs.iter().map(|o| o.key.as_str()).collect();
    assert_eq!(keys, vec!["logs/a.log", "logs/b.log"]);

    // Size comes from the stored payload
    assert_eq!(logs[0].size, "logs/a.log".len() as u64);
}

#[tokio::test]
async fn basic_list_empty_bucket() {
    let bucket = BucketName::new("empty-bucket").unwrap();
    let services = create_in_memory_app(bucket.clone()).unwrap();

    let objects = services
        .object_service
        .list_objects(&bucket, None)
        .await
        .unwrap();
    assert!(objects.is_empty());
}

#[tokio::test]
async fn basic_search() {
    let (bucket, services) = app_with(&[
        "backups/db-2024-01-01.sql",
        "backups/db-2024-01-02.sql",
        "backups/web-2024-01-01.tar",
    ])
    .await;

    let found = services
        .object_service
        .search_objects(&bucket, Some("backups"), "db-")
        .await
        .unwrap();
    assert_eq!(found.len(), 2);

    // Matching is case-sensitive
    let none = services
        .object_service
        .search_objects(&bucket, None, "DB-")
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn basic_delete() {
    let (bucket, services) = app_with(&["to_delete.txt", "to_keep.txt"]).await;
    let key = ObjectKey::new("to_delete.txt").unwrap();

    services
        .object_service
        .delete_object(&bucket, &key)
        .await
        .unwrap();

    let remaining = services
        .object_service
        .list_objects(&bucket, None)
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].key.as_str(), "to_keep.txt");
}

#[tokio::test]
async fn other_bucket_is_rejected() {
    let (_, services) = app_with(&["a.txt"]).await;
    let other = BucketName::new("someone-elses-bucket").unwrap();

    let result = services.object_service.list_objects(&other, None).await;
    assert!(matches!(
        result,
        Err(StorageError::UnsupportedOperation { .. })
    ));
}

#[tokio::test]
async fn search_with_partial_prefix() {
    let (bucket, services) = app_with(&[
        "report-2024-01.csv",
        "report-2024-02.csv",
        "reports/summary.csv",
        "summary.csv",
    ])
    .await;

    let found = services
        .object_service
        .search_objects(&bucket, Some("report-"), "2024-02")
        .await
        .unwrap();
    let keys: Vec<_> = found.iter().map(|o| o.key.as_str()).collect();
    assert_eq!(keys, vec!["report-2024-02.csv"]);

    let listed = services
        .object_service
        .list_objects(&bucket, Some("report"))
        .await
        .unwrap();
    assert_eq!(listed.len(), 3);
}
