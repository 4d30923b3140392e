//! Uploads written to a directory served under a public URL prefix.

use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use folio_core::ports::{MediaStorage, StorageError, StoredMedia};

pub struct LocalMediaStorage {
    root: PathBuf,
    public_prefix: String,
}

impl LocalMediaStorage {
    /// `public_prefix` is the URL path the directory is mounted at, e.g. `/uploads`.
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        let public_prefix = public_prefix.into().trim_end_matches('/').to_string();
        Self {
            root: root.into(),
            public_prefix,
        }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn store(&self, bytes: &[u8], extension: &str) -> Result<StoredMedia, StorageError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StorageError::Io(format!("create {}: {e}", self.root.display())))?;

        let filename = format!(
            "{}-{}.{}",
            chrono::Utc::now().timestamp_millis(),
            Uuid::new_v4().simple(),
            extension
        );
        let path = self.root.join(&filename);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| StorageError::Io(format!("write {}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "Upload written");

        Ok(StoredMedia {
            url: format!("{}/{}", self.public_prefix, filename),
            filename,
            size: bytes.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_writes_file_and_builds_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalMediaStorage::new(dir.path().join("nested"), "/uploads/");

        let stored = storage.store(b"\x89PNG....", "png").await.unwrap();

        assert!(stored.filename.ends_with(".png"));
        assert_eq!(stored.url, format!("/uploads/{}", stored.filename));
        assert_eq!(stored.size, 8);

        let on_disk = tokio::fs::read(dir.path().join("nested").join(&stored.filename))
            .await
            .unwrap();
        assert_eq!(on_disk, b"\x89PNG....");
    }

    #[tokio::test]
    async fn test_names_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalMediaStorage::new(dir.path(), "/uploads");

        let a = storage.store(b"a", "jpg").await.unwrap();
        let b = storage.store(b"b", "jpg").await.unwrap();
        assert_ne!(a.filename, b.filename);
    }
}
