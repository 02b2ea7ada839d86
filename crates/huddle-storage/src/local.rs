use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use huddle_core::ObjectPayload;

use crate::store::ObjectStore;

/// Filesystem-backed object store for local testing.
///
/// Bodies land at `{base}/{bucket}/{key}`; the content type and any
/// user-defined metadata go in a JSON sidecar next to the body.
pub struct LocalObjectStore {
    base_path: PathBuf,
}

#[derive(Serialize, Deserialize, Default)]
struct Sidecar {
    mime_type: String,
    metadata: HashMap<String, String>,
}

impl LocalObjectStore {
    pub fn new(base_path: &Path) -> anyhow::Result<Self> {
        std::fs::create_dir_all(base_path)?;
        Ok(Self {
            base_path: base_path.to_path_buf(),
        })
    }

    fn object_path(&self, bucket: &str, key: &str) -> PathBuf {
        self.base_path.join(bucket).join(key)
    }

    fn sidecar_path(&self, bucket: &str, key: &str) -> PathBuf {
        let mut path = self.object_path(bucket, key).into_os_string();
        path.push(".meta.json");
        PathBuf::from(path)
    }

    fn read_sidecar(&self, bucket: &str, key: &str) -> anyhow::Result<Sidecar> {
        let raw = std::fs::read(self.sidecar_path(bucket, key))?;
        Ok(serde_json::from_slice(&raw)?)
    }

    fn write_sidecar(&self, bucket: &str, key: &str, sidecar: &Sidecar) -> anyhow::Result<()> {
        let raw = serde_json::to_vec(sidecar)?;
        std::fs::write(self.sidecar_path(bucket, key), raw)?;
        Ok(())
    }

    /// Store with user-defined metadata attached, the equivalent of
    /// `x-amz-meta-*` headers set by an uploading client.
    pub async fn store_object_with_metadata(
        &self,
        bucket: &str,
        key: &str,
        mime_type: &str,
        body: &[u8],
        metadata: &HashMap<String, String>,
    ) -> anyhow::Result<()> {
        let path = self.object_path(bucket, key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, body)?;
        self.write_sidecar(
            bucket,
            key,
            &Sidecar {
                mime_type: mime_type.to_string(),
                metadata: metadata.clone(),
            },
        )
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn fetch_object(&self, bucket: &str, key: &str) -> anyhow::Result<ObjectPayload> {
        let body = std::fs::read(self.object_path(bucket, key))?;
        let mime_type = self
            .read_sidecar(bucket, key)
            .map(|s| s.mime_type)
            .unwrap_or_else(|_| "application/octet-stream".to_string());
        Ok(ObjectPayload { body, mime_type })
    }

    async fn fetch_metadata(
        &self,
        bucket: &str,
        key: &str,
    ) -> anyhow::Result<HashMap<String, String>> {
        // existence probe on the body, metadata from the sidecar
        if !self.object_path(bucket, key).exists() {
            anyhow::bail!("object not found: {bucket}/{key}");
        }
        Ok(self
            .read_sidecar(bucket, key)
            .map(|s| s.metadata)
            .unwrap_or_default())
    }

    async fn store_object(
        &self,
        bucket: &str,
        key: &str,
        mime_type: &str,
        body: &[u8],
    ) -> anyhow::Result<()> {
        // a plain put replaces the object entirely, metadata included
        self.store_object_with_metadata(bucket, key, mime_type, body, &HashMap::new())
            .await
    }
}
