use actix_web::{HttpResponse, web};
use uuid::Uuid;

use folio_core::domain::TalkInput;
use folio_shared::MessageResponse;

use crate::middleware::auth::{AdminIdentity, OptionalIdentity};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/talks
pub async fn list(
    state: web::Data<AppState>,
    viewer: OptionalIdentity,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.talks.list(!viewer.is_admin()).await?))
}

/// GET /api/talks/{id}
pub async fn get(
    state: web::Data<AppState>,
    viewer: OptionalIdentity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let talk = state.talks.get(path.into_inner(), viewer.is_admin()).await?;
    Ok(HttpResponse::Ok().json(talk))
}

/// POST /api/talks
pub async fn create(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    body: web::Json<TalkInput>,
) -> AppResult<HttpResponse> {
    let talk = state.talks.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(talk))
}

/// PUT /api/talks/{id}
pub async fn update(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<TalkInput>,
) -> AppResult<HttpResponse> {
    let talk = state
        .talks
        .update(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(talk))
}

/// DELETE /api/talks/{id}
pub async fn delete(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.talks.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Talk deleted successfully")))
}
