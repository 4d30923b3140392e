use actix_web::{HttpResponse, web};

use folio_core::domain::TaxonomyInput;

use crate::middleware::auth::AdminIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.taxonomy.categories().await?))
}

/// POST /api/categories
pub async fn create_category(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    body: web::Json<TaxonomyInput>,
) -> AppResult<HttpResponse> {
    let category = state.taxonomy.create_category(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(category))
}

/// GET /api/tags
pub async fn list_tags(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.taxonomy.tags().await?))
}

/// POST /api/tags
pub async fn create_tag(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    body: web::Json<TaxonomyInput>,
) -> AppResult<HttpResponse> {
    let tag = state.taxonomy.create_tag(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(tag))
}
