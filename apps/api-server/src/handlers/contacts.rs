//! Contact inbox. Submitting is public; everything else is admin-only.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use folio_core::domain::{ContactFlags, ContactInput};
use folio_core::ports::ContactFilter;
use folio_shared::MessageResponse;
use folio_shared::dto::{ContactListQuery, ContactReceipt};

use crate::middleware::auth::AdminIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/contacts
pub async fn submit(
    state: web::Data<AppState>,
    body: web::Json<ContactInput>,
) -> AppResult<HttpResponse> {
    let message = state.contacts.submit(body.into_inner()).await?;

    Ok(HttpResponse::Created().json(ContactReceipt {
        success: true,
        message: "Contact saved successfully".to_string(),
        id: message.id,
    }))
}

/// GET /api/contacts
pub async fn list(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    query: web::Query<ContactListQuery>,
) -> AppResult<HttpResponse> {
    let filter = ContactFilter {
        read: query.read,
        replied: query.replied,
    };
    Ok(HttpResponse::Ok().json(state.contacts.list(filter).await?))
}

/// GET /api/contacts/{id}
pub async fn get(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.contacts.get(path.into_inner()).await?))
}

/// PATCH /api/contacts/{id} - toggle `read` / `replied`.
pub async fn update(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<ContactFlags>,
) -> AppResult<HttpResponse> {
    let message = state
        .contacts
        .update_flags(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(message))
}

/// DELETE /api/contacts/{id}
pub async fn delete(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.contacts.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Contact deleted successfully")))
}
