//! Object storage on the local filesystem

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, instrument};

use catalog_core::traits::ObjectStore;
use catalog_core::DomainError;

/// Stores uploads under `base_dir` and serves them from `public_base_url`
///
/// key "items/1700000000000_photo.png" →
/// `{base_dir}/items/1700000000000_photo.png`, published at
/// `{public_base_url}/items/1700000000000_photo.png`.
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    base_dir: PathBuf,
    public_base_url: String,
}

impl LocalObjectStore {
    pub fn new(base_dir: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Map a key to a path below `base_dir`, rejecting keys that could escape it
    fn resolve(&self, key: &str) -> Result<PathBuf, DomainError> {
        let relative = Path::new(key);
        let plain = !key.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));

        if !plain {
            return Err(DomainError::StorageError(format!("invalid object key: {key:?}")));
        }

        Ok(self.base_dir.join(relative))
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.public_base_url)
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, DomainError> {
        let path = self.resolve(key)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::StorageError(e.to_string()))?;
        }
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        debug!(path = %path.display(), content_type, "Object stored");
        Ok(self.public_url(key))
    }
}
