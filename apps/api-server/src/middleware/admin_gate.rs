//! Gate in front of the admin bundle.
//!
//! `/admin/login` (and the bundle's assets) are open. Any other `/admin`
//! path needs an admin session: without one the browser is sent to the
//! login page, and a signed-in non-admin is sent back to the site root.

use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header,
};
use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::sync::Arc;

use folio_core::ports::TokenService;

use super::auth::authenticate;

pub const LOGIN_PATH: &str = "/admin/login";

const OPEN_PREFIXES: &[&str] = &[LOGIN_PATH, "/admin/assets/"];

fn is_open(path: &str) -> bool {
    OPEN_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

pub struct AdminGate {
    tokens: Arc<dyn TokenService>,
}

impl AdminGate {
    pub fn new(tokens: Arc<dyn TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdminGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AdminGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminGateService {
            service,
            tokens: self.tokens.clone(),
        }))
    }
}

pub struct AdminGateService<S> {
    service: S,
    tokens: Arc<dyn TokenService>,
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

impl<S, B> Service<ServiceRequest> for AdminGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !is_open(req.path()) {
            let denied = match authenticate(req.request(), self.tokens.as_ref()) {
                Ok(identity) if identity.is_admin() => None,
                Ok(identity) => {
                    tracing::debug!(user_id = %identity.user_id, "Non-admin sent away from admin area");
                    Some(redirect("/"))
                }
                Err(_) => Some(redirect(LOGIN_PATH)),
            };

            if let Some(response) = denied {
                return Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) });
            }
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_and_assets_are_open() {
        assert!(is_open("/admin/login"));
        assert!(is_open("/admin/assets/app.js"));
        assert!(!is_open("/admin"));
        assert!(!is_open("/admin/blog"));
    }
}
