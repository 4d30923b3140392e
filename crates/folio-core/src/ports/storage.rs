//! Media storage port - where uploaded images end up.

use async_trait::async_trait;

/// A file accepted by the storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMedia {
    /// Public URL the site can embed.
    pub url: String,
    pub filename: String,
    pub size: usize,
}

#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Persist `bytes` under a fresh name with the given extension.
    async fn store(&self, bytes: &[u8], extension: &str) -> Result<StoredMedia, StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(String),
}
