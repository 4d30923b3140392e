//! Image upload (multipart `file` field).

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use futures::StreamExt;

use folio_core::services::MAX_UPLOAD_BYTES;
use folio_shared::dto::UploadResponse;

use crate::middleware::auth::AdminIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

/// POST /api/upload
pub async fn upload_image(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> AppResult<HttpResponse> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| AppError::BadRequest(e.to_string()))?;
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let declared_type = field.content_type().map(|mime| mime.to_string());

        // Stop reading as soon as the cap is passed; one byte over is enough
        // for the size check to reject it.
        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| AppError::BadRequest(e.to_string()))?;
            let room = MAX_UPLOAD_BYTES + 1 - bytes.len();
            bytes.extend_from_slice(&chunk[..chunk.len().min(room)]);
            if bytes.len() > MAX_UPLOAD_BYTES {
                break;
            }
        }

        let uploaded = state
            .media
            .upload_image(declared_type.as_deref(), &bytes)
            .await?;

        return Ok(HttpResponse::Ok().json(UploadResponse {
            url: uploaded.media.url,
            filename: uploaded.media.filename,
            size: uploaded.media.size,
            mime_type: uploaded.mime_type.to_string(),
        }));
    }

    Err(AppError::BadRequest("No file provided".to_string()))
}
