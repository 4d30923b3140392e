//! Sign-in, sign-out and the current session.

use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{HttpResponse, web};

use folio_core::domain::User;
use folio_core::error::DomainError;
use folio_shared::MessageResponse;
use folio_shared::dto::{LoginRequest, SessionResponse, UserResponse};

use crate::middleware::auth::{Identity, SESSION_COOKIE};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(crate) fn user_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id,
        email: user.email.clone(),
        name: user.name.clone(),
        role: user.role.as_str().to_string(),
        created_at: Some(user.created_at),
    }
}

fn session_cookie(token: String, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::seconds(max_age_secs))
        .finish()
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let session = state.accounts.login(req.email.trim(), &req.password).await?;
    let cookie = session_cookie(
        session.token.clone(),
        session.expires_in,
        state.site.cookie_secure,
    );

    Ok(HttpResponse::Ok().cookie(cookie).json(SessionResponse {
        access_token: session.token,
        token_type: "Bearer".to_string(),
        expires_in: session.expires_in,
        user: user_response(&session.user),
    }))
}

/// POST /api/auth/logout
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    let mut cookie = session_cookie(String::new(), 0, state.site.cookie_secure);
    cookie.make_removal();

    HttpResponse::Ok()
        .cookie(cookie)
        .json(MessageResponse::new("Signed out"))
}

/// GET /api/auth/me
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    // A valid token for a deleted account is no session at all.
    let user = match state.accounts.find(identity.user_id).await {
        Ok(user) => user,
        Err(DomainError::NotFound { .. }) => return Err(AppError::Unauthorized),
        Err(e) => return Err(e.into()),
    };

    Ok(HttpResponse::Ok().json(user_response(&user)))
}
