use std::collections::HashMap;

use async_trait::async_trait;
use huddle_core::ObjectPayload;

/// Trait for object-storage backends.
///
/// Every method is a single request/response exchange: failures from the
/// backend (not found, access denied, unavailable) surface verbatim to the
/// caller, with no retries at this layer.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch an object's body and content type.
    async fn fetch_object(&self, bucket: &str, key: &str) -> anyhow::Result<ObjectPayload>;

    /// Fetch only an object's user-defined metadata, via a metadata probe
    /// rather than a body fetch.
    async fn fetch_metadata(
        &self,
        bucket: &str,
        key: &str,
    ) -> anyhow::Result<HashMap<String, String>>;

    /// Store a payload under a key. Overwrites any existing object at the
    /// same key; last write wins.
    async fn store_object(
        &self,
        bucket: &str,
        key: &str,
        mime_type: &str,
        body: &[u8],
    ) -> anyhow::Result<()>;
}
