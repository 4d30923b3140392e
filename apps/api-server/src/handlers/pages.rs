//! Singleton pages: home, about and the contact page.

use actix_web::{HttpResponse, web};

use folio_core::domain::{AboutPageInput, ContactPageInput, HomePageInput};

use crate::middleware::auth::{AdminIdentity, OptionalIdentity};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/home
pub async fn get_home(
    state: web::Data<AppState>,
    viewer: OptionalIdentity,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.pages.home(viewer.is_admin()).await?))
}

/// PUT /api/home
pub async fn update_home(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    body: web::Json<HomePageInput>,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.pages.update_home(body.into_inner()).await?))
}

/// GET /api/about
pub async fn get_about(
    state: web::Data<AppState>,
    viewer: OptionalIdentity,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.pages.about(viewer.is_admin()).await?))
}

/// PUT /api/about
pub async fn update_about(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    body: web::Json<AboutPageInput>,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.pages.update_about(body.into_inner()).await?))
}

/// GET /api/contact-page
pub async fn get_contact_page(
    state: web::Data<AppState>,
    viewer: OptionalIdentity,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.pages.contact_page(viewer.is_admin()).await?))
}

/// PUT or POST /api/contact-page
pub async fn save_contact_page(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    body: web::Json<ContactPageInput>,
) -> AppResult<HttpResponse> {
    let page = state.pages.upsert_contact_page(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(page))
}
