use serde::{Deserialize, Serialize};
use std::fmt;

/// Recording lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingStatus {
    Transcoding,
    Completed,
}

impl fmt::Display for RecordingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordingStatus::Transcoding => write!(f, "transcoding"),
            RecordingStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for RecordingStatus {
    type Err = crate::error::HuddleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transcoding" => Ok(RecordingStatus::Transcoding),
            "completed" => Ok(RecordingStatus::Completed),
            _ => Err(crate::error::HuddleError::InvalidStatus(s.to_string())),
        }
    }
}

/// A recording's metadata record as persisted in the document store.
///
/// Field names serialize to the persisted attribute names (`recordingId`,
/// `createdAt`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingRecord {
    pub recording_id: String,
    pub standup_id: String,
    pub user_id: String,
    /// User-supplied display name. An absent name stays absent; it is never
    /// defaulted to an empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub status: RecordingStatus,
    /// Storage key of the transcoded object; empty until transcoding
    /// finishes.
    pub transcoded_file_key: String,
}

/// An object body plus its MIME type.
pub struct ObjectPayload {
    pub body: Vec<u8>,
    pub mime_type: String,
}

impl fmt::Debug for ObjectPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPayload")
            .field("body_len", &self.body.len())
            .field("mime_type", &self.mime_type)
            .finish()
    }
}
