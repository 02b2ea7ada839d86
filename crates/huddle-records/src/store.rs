use std::collections::HashMap;

use async_trait::async_trait;

/// Trait for recording-record backends.
///
/// No ordering is enforced between the two calls: callers own the
/// sequencing, and concurrent calls racing on the same recording resolve
/// last-write-wins at the backend.
#[async_trait]
pub trait RecordingStore: Send + Sync {
    /// Insert (or fully overwrite) the record for an uploaded raw recording.
    ///
    /// The new record starts in `transcoding` status with an empty
    /// transcoded file key, and `createdAt` equal to `updatedAt`.
    /// `metadata["name"]` becomes the record name when present; an absent
    /// name stays absent. A pre-existing record at the same key is silently
    /// replaced in full, `createdAt` included.
    async fn create_record(
        &self,
        s3_key: &str,
        metadata: &HashMap<String, String>,
    ) -> anyhow::Result<()>;

    /// Mark the record for a recording as transcoded.
    ///
    /// Partial update: sets `updatedAt`, `status = completed` and
    /// `transcodedFileKey` to the given key; every other attribute is left
    /// untouched.
    async fn mark_completed(&self, s3_key: &str) -> anyhow::Result<()>;
}
