use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use crate::application::ports::{ImageStore, StoreError};
use crate::domain::value_objects::ContentKey;

/// Content-addressed filesystem store.
///
/// Blobs live under `<root>/images/<prefix>/<key>` with a two-character
/// hex fan-out. Writes go through a temp file and rename into place, so
/// a reader never observes a partial blob and concurrent puts of the
/// same content converge on the same record.
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create the directory structure.
    pub async fn init(&self) -> Result<(), StoreError> {
        fs::create_dir_all(self.root.join("tmp")).await?;
        fs::create_dir_all(self.root.join("images")).await?;
        Ok(())
    }

    fn blob_path(&self, key: &ContentKey) -> PathBuf {
        self.root.join("images").join(key.prefix()).join(key.as_str())
    }

    /// Two-phase write: temp file first, then rename into place. A
    /// failed rename removes the temp file so `tmp/` never accumulates
    /// orphans.
    async fn write_blob(
        tmp_path: &Path,
        final_path: &Path,
        bytes: &[u8],
    ) -> Result<(), StoreError> {
        fs::write(tmp_path, bytes).await?;
        if let Err(e) = fs::rename(tmp_path, final_path).await {
            let _ = fs::remove_file(tmp_path).await;
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl ImageStore for FilesystemStore {
    async fn put(&self, key: &ContentKey, bytes: &[u8]) -> Result<(), StoreError> {
        let final_path = self.blob_path(key);

        // Content-addressed: an existing record already holds these bytes.
        if fs::try_exists(&final_path).await? {
            debug!(%key, "blob already stored, skipping write");
            return Ok(());
        }

        let parent = final_path
            .parent()
            .ok_or_else(|| StoreError::Internal("blob path has no parent".to_string()))?;
        fs::create_dir_all(parent).await?;

        let tmp_path = self.root.join("tmp").join(Uuid::new_v4().to_string());
        Self::write_blob(&tmp_path, &final_path, bytes).await?;

        debug!(%key, bytes = bytes.len(), "blob written");
        Ok(())
    }

    async fn get(&self, key: &ContentKey) -> Result<Vec<u8>, StoreError> {
        match fs::read(self.blob_path(key)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StoreError::NotFound(key.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
