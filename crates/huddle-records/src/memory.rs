use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use huddle_core::{RecordingKey, RecordingRecord, RecordingStatus};

use crate::store::RecordingStore;

/// In-memory recording store for tests.
///
/// Mirrors the document database's write semantics: create is a full
/// overwrite, mark_completed is a partial update that creates the item when
/// it is absent (with only the updated attributes populated).
#[derive(Default)]
pub struct MemoryRecordingStore {
    records: Mutex<HashMap<(String, String), RecordingRecord>>,
}

impl MemoryRecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a record back, for asserting on lifecycle state.
    pub async fn get(&self, s3_key: &str) -> anyhow::Result<Option<RecordingRecord>> {
        let key = RecordingKey::parse(s3_key)?;
        Ok(self
            .records
            .lock()
            .await
            .get(&(key.pk(), key.sk()))
            .cloned())
    }
}

#[async_trait]
impl RecordingStore for MemoryRecordingStore {
    async fn create_record(
        &self,
        s3_key: &str,
        metadata: &HashMap<String, String>,
    ) -> anyhow::Result<()> {
        let key = RecordingKey::parse(s3_key)?;
        let now = chrono::Utc::now().to_rfc3339();
        let record = RecordingRecord {
            recording_id: key.recording_id.clone(),
            standup_id: key.standup_id.clone(),
            user_id: key.user_id.clone(),
            name: metadata.get("name").cloned(),
            created_at: now.clone(),
            updated_at: now,
            status: RecordingStatus::Transcoding,
            transcoded_file_key: String::new(),
        };
        self.records
            .lock()
            .await
            .insert((key.pk(), key.sk()), record);
        Ok(())
    }

    async fn mark_completed(&self, s3_key: &str) -> anyhow::Result<()> {
        let key = RecordingKey::parse(s3_key)?;
        let now = chrono::Utc::now().to_rfc3339();
        let mut records = self.records.lock().await;
        // update on a missing key upserts a bare item, as the backend does
        let entry = records
            .entry((key.pk(), key.sk()))
            .or_insert_with(|| RecordingRecord {
                recording_id: String::new(),
                standup_id: String::new(),
                user_id: String::new(),
                name: None,
                created_at: String::new(),
                updated_at: String::new(),
                status: RecordingStatus::Transcoding,
                transcoded_file_key: String::new(),
            });
        entry.updated_at = now;
        entry.status = RecordingStatus::Completed;
        entry.transcoded_file_key = s3_key.to_string();
        Ok(())
    }
}
