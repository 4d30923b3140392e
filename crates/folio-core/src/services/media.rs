//! Image upload validation in front of the storage backend.

use std::sync::Arc;

use crate::error::DomainError;
use crate::ports::{MediaStorage, StoredMedia};

pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// An accepted upload together with the detected content type.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub media: StoredMedia,
    pub mime_type: &'static str,
}

/// Identify the image format from its leading bytes.
pub fn sniff_image(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [0x89, 0x50, 0x4E, 0x47, ..] => Some("image/png"),
        [0x47, 0x49, 0x46, 0x38, ..] => Some("image/gif"),
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Some("image/webp"),
        _ => None,
    }
}

fn extension_for(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => "bin",
    }
}

pub struct MediaService {
    storage: Arc<dyn MediaStorage>,
}

impl MediaService {
    pub fn new(storage: Arc<dyn MediaStorage>) -> Self {
        Self { storage }
    }

    /// Validate and store an image. `declared_type` is the client-supplied
    /// content type; the stored extension follows the sniffed bytes.
    pub async fn upload_image(
        &self,
        declared_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<UploadedImage, DomainError> {
        if bytes.is_empty() {
            return Err(DomainError::validation("No file provided"));
        }
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(DomainError::validation(
                "File too large. Maximum size is 5MB.",
            ));
        }
        if !declared_type.is_some_and(|t| t.starts_with("image/")) {
            return Err(DomainError::validation("Only image files are allowed"));
        }
        let mime_type = sniff_image(bytes).ok_or_else(|| {
            DomainError::validation("Unsupported file type. Allowed: JPEG, PNG, WebP, GIF.")
        })?;

        let media = self
            .storage
            .store(bytes, extension_for(mime_type))
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        tracing::info!(filename = %media.filename, size = media.size, "Image stored");
        Ok(UploadedImage { media, mime_type })
    }
}
