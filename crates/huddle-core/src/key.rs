use serde::{Deserialize, Serialize};

use crate::error::{HuddleError, Result};

/// Identifiers embedded in a recording's storage key.
///
/// Upload keys follow the fixed convention
/// `audio/standups/{standup_id}/{date_key}/{user_id}/{recording_id}.{ext}`.
/// The date key is opaque to this layer: it is never parsed as a date, only
/// carried into the composite sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingKey {
    pub standup_id: String,
    pub date_key: String,
    pub user_id: String,
    pub recording_id: String,
}

impl RecordingKey {
    /// Parse a storage key into its components.
    ///
    /// The filename's extension is discarded. A filename with several dots
    /// keeps only the token before the first one as the recording id.
    pub fn parse(key: &str) -> Result<Self> {
        let segments: Vec<&str> = key.split('/').collect();
        let [prefix, kind, standup_id, date_key, user_id, filename] = segments[..] else {
            return Err(HuddleError::MalformedKey(format!(
                "expected 6 path segments, got {}: {key}",
                segments.len()
            )));
        };

        if prefix != "audio" || kind != "standups" {
            return Err(HuddleError::MalformedKey(format!(
                "expected an audio/standups/ prefix: {key}"
            )));
        }

        let Some((recording_id, ext)) = filename.split_once('.') else {
            return Err(HuddleError::MalformedKey(format!(
                "filename has no extension: {key}"
            )));
        };

        if standup_id.is_empty()
            || date_key.is_empty()
            || user_id.is_empty()
            || recording_id.is_empty()
            || ext.is_empty()
        {
            return Err(HuddleError::MalformedKey(format!(
                "empty key component: {key}"
            )));
        }

        Ok(Self {
            standup_id: standup_id.to_string(),
            date_key: date_key.to_string(),
            user_id: user_id.to_string(),
            recording_id: recording_id.to_string(),
        })
    }

    /// Partition key: `standup#{standup_id}`.
    pub fn pk(&self) -> String {
        format!("standup#{}", self.standup_id)
    }

    /// Sort key: `update#{date_key}#user#{user_id}#recording#{recording_id}`.
    pub fn sk(&self) -> String {
        format!(
            "update#{}#user#{}#recording#{}",
            self.date_key, self.user_id, self.recording_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_well_formed_key() {
        let key = RecordingKey::parse("audio/standups/abc123/01-02-2024/user42/rec789.webm")
            .unwrap();
        assert_eq!(key.standup_id, "abc123");
        assert_eq!(key.date_key, "01-02-2024");
        assert_eq!(key.user_id, "user42");
        assert_eq!(key.recording_id, "rec789");
    }

    #[test]
    fn composite_key_format() {
        let key = RecordingKey::parse("audio/standups/abc123/01-02-2024/user42/rec789.webm")
            .unwrap();
        assert_eq!(key.pk(), "standup#abc123");
        assert_eq!(key.sk(), "update#01-02-2024#user#user42#recording#rec789");
    }

    #[test]
    fn multi_dot_filename_keeps_first_token() {
        let key = RecordingKey::parse("audio/standups/s/d/u/rec.take2.webm").unwrap();
        assert_eq!(key.recording_id, "rec");
    }

    #[test]
    fn date_key_is_opaque() {
        let key = RecordingKey::parse("audio/standups/s/whatever-goes-here/u/r.ogg").unwrap();
        assert_eq!(key.date_key, "whatever-goes-here");
        assert_eq!(key.sk(), "update#whatever-goes-here#user#u#recording#r");
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert!(matches!(
            RecordingKey::parse("audio/standups/abc/rec789.webm"),
            Err(HuddleError::MalformedKey(_))
        ));
        assert!(matches!(
            RecordingKey::parse("audio/standups/a/b/c/d/e/rec.webm"),
            Err(HuddleError::MalformedKey(_))
        ));
    }

    #[test]
    fn rejects_wrong_prefix() {
        assert!(matches!(
            RecordingKey::parse("video/standups/a/b/c/rec.webm"),
            Err(HuddleError::MalformedKey(_))
        ));
        assert!(matches!(
            RecordingKey::parse("audio/meetings/a/b/c/rec.webm"),
            Err(HuddleError::MalformedKey(_))
        ));
    }

    #[test]
    fn rejects_missing_extension() {
        assert!(matches!(
            RecordingKey::parse("audio/standups/a/b/c/rec789"),
            Err(HuddleError::MalformedKey(_))
        ));
        assert!(matches!(
            RecordingKey::parse("audio/standups/a/b/c/rec789."),
            Err(HuddleError::MalformedKey(_))
        ));
    }

    #[test]
    fn rejects_empty_components() {
        assert!(matches!(
            RecordingKey::parse("audio/standups//01-02-2024/user42/rec.webm"),
            Err(HuddleError::MalformedKey(_))
        ));
        assert!(matches!(
            RecordingKey::parse("audio/standups/a/b/c/.webm"),
            Err(HuddleError::MalformedKey(_))
        ));
    }
}
