use std::collections::HashMap;

use huddle_core::RecordingStatus;
use huddle_records::RecordingStore;
use huddle_records::memory::MemoryRecordingStore;

const KEY: &str = "audio/standups/abc123/01-02-2024/user42/rec789.webm";

fn named(name: &str) -> HashMap<String, String> {
    let mut metadata = HashMap::new();
    metadata.insert("name".to_string(), name.to_string());
    metadata
}

#[tokio::test]
async fn create_starts_in_transcoding() {
    let store = MemoryRecordingStore::new();
    store.create_record(KEY, &HashMap::new()).await.unwrap();

    let record = store.get(KEY).await.unwrap().unwrap();
    assert_eq!(record.status, RecordingStatus::Transcoding);
    assert_eq!(record.transcoded_file_key, "");
    assert_eq!(record.recording_id, "rec789");
    assert_eq!(record.standup_id, "abc123");
    assert_eq!(record.user_id, "user42");
    assert_eq!(record.created_at, record.updated_at);
    assert_eq!(record.name, None);
}

#[tokio::test]
async fn create_keeps_supplied_name() {
    let store = MemoryRecordingStore::new();
    store.create_record(KEY, &named("Monday standup")).await.unwrap();

    let record = store.get(KEY).await.unwrap().unwrap();
    assert_eq!(record.name.as_deref(), Some("Monday standup"));
}

#[tokio::test]
async fn mark_completed_touches_only_its_three_fields() {
    let store = MemoryRecordingStore::new();
    store.create_record(KEY, &named("Monday standup")).await.unwrap();
    let before = store.get(KEY).await.unwrap().unwrap();

    store.mark_completed(KEY).await.unwrap();

    let after = store.get(KEY).await.unwrap().unwrap();
    assert_eq!(after.status, RecordingStatus::Completed);
    assert_eq!(after.transcoded_file_key, KEY);
    assert_eq!(after.name, before.name);
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.recording_id, before.recording_id);
    assert_eq!(after.standup_id, before.standup_id);
    assert_eq!(after.user_id, before.user_id);
}

#[tokio::test]
async fn recreate_overwrites_everything() {
    let store = MemoryRecordingStore::new();
    store.create_record(KEY, &named("first")).await.unwrap();
    store.mark_completed(KEY).await.unwrap();

    store.create_record(KEY, &named("second")).await.unwrap();

    let record = store.get(KEY).await.unwrap().unwrap();
    assert_eq!(record.name.as_deref(), Some("second"));
    assert_eq!(record.status, RecordingStatus::Transcoding);
    assert_eq!(record.transcoded_file_key, "");
    assert_eq!(record.created_at, record.updated_at);
}

#[tokio::test]
async fn mark_completed_without_create_upserts() {
    // sequencing is the caller's responsibility; an out-of-order completion
    // creates a bare record, matching the backend's update semantics
    let store = MemoryRecordingStore::new();
    store.mark_completed(KEY).await.unwrap();

    let record = store.get(KEY).await.unwrap().unwrap();
    assert_eq!(record.status, RecordingStatus::Completed);
    assert_eq!(record.transcoded_file_key, KEY);
    assert_eq!(record.recording_id, "");
    assert_eq!(record.created_at, "");
}

#[tokio::test]
async fn malformed_key_is_rejected() {
    let store = MemoryRecordingStore::new();
    assert!(
        store
            .create_record("audio/standups/missing-bits.webm", &HashMap::new())
            .await
            .is_err()
    );
    assert!(store.mark_completed("not-a-key").await.is_err());
}
