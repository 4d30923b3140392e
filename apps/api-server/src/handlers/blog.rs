//! Blog post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use folio_core::domain::BlogPostInput;
use folio_shared::MessageResponse;
use folio_shared::dto::BlogListQuery;

use crate::middleware::auth::{AdminIdentity, OptionalIdentity};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/blog
///
/// Visitors only ever see published posts. Admins see drafts too unless
/// they ask for `?published=true`.
pub async fn list(
    state: web::Data<AppState>,
    viewer: OptionalIdentity,
    query: web::Query<BlogListQuery>,
) -> AppResult<HttpResponse> {
    let published_only = !viewer.is_admin() || query.published == Some(true);
    Ok(HttpResponse::Ok().json(state.blog.list(published_only).await?))
}

/// GET /api/blog/{id}
pub async fn get(
    state: web::Data<AppState>,
    viewer: OptionalIdentity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.blog.get(path.into_inner(), viewer.is_admin()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// GET /api/blog/slug/{slug} - the public read; counts a view.
pub async fn get_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.blog.read_published(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/blog
pub async fn create(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    body: web::Json<BlogPostInput>,
) -> AppResult<HttpResponse> {
    let post = state.blog.create(admin.user_id, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/blog/{id}
pub async fn update(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<BlogPostInput>,
) -> AppResult<HttpResponse> {
    let post = state
        .blog
        .update(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/blog/{id}
pub async fn delete(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.blog.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Blog post deleted successfully")))
}
