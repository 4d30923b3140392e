//! Admin-only account and dashboard endpoints.

use actix_web::{HttpResponse, web};

use folio_shared::MessageResponse;
use folio_shared::dto::ChangePasswordRequest;

use crate::middleware::auth::AdminIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/admin/change-password
pub async fn change_password(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    body: web::Json<ChangePasswordRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    state
        .accounts
        .change_password(admin.user_id, &req.current_password, &req.new_password)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Password changed successfully")))
}

/// GET /api/admin/stats
pub async fn stats(_admin: AdminIdentity, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.stats.dashboard().await?))
}
