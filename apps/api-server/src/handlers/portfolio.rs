use actix_web::{HttpResponse, web};
use uuid::Uuid;

use folio_core::domain::PortfolioProjectInput;
use folio_core::ports::PortfolioFilter;
use folio_shared::MessageResponse;
use folio_shared::dto::PortfolioListQuery;

use crate::middleware::auth::{AdminIdentity, OptionalIdentity};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/portfolio
pub async fn list(
    state: web::Data<AppState>,
    viewer: OptionalIdentity,
    query: web::Query<PortfolioListQuery>,
) -> AppResult<HttpResponse> {
    let filter = PortfolioFilter {
        published_only: !viewer.is_admin(),
        featured_only: query.featured == Some(true),
    };
    Ok(HttpResponse::Ok().json(state.portfolio.list(filter).await?))
}

/// GET /api/portfolio/{id}
pub async fn get(
    state: web::Data<AppState>,
    viewer: OptionalIdentity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let project = state
        .portfolio
        .get(path.into_inner(), viewer.is_admin())
        .await?;
    Ok(HttpResponse::Ok().json(project))
}

/// POST /api/portfolio
pub async fn create(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    body: web::Json<PortfolioProjectInput>,
) -> AppResult<HttpResponse> {
    let project = state
        .portfolio
        .create(admin.user_id, body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(project))
}

/// PUT /api/portfolio/{id}
pub async fn update(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<PortfolioProjectInput>,
) -> AppResult<HttpResponse> {
    let project = state
        .portfolio
        .update(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(project))
}

/// DELETE /api/portfolio/{id}
pub async fn delete(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.portfolio.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Portfolio project deleted successfully")))
}
