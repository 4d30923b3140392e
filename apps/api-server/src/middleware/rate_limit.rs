//! Rate limiting middleware.

use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::Method,
};
use folio_shared::ErrorResponse;
use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;

use folio_core::ports::RateLimiter;

use crate::observability::RequestId;

/// Rate limiting middleware factory.
///
/// Requests are keyed by path and client IP, so each wrapped resource has
/// its own budget. The IP is the socket peer unless forwarding headers are
/// trusted. Without a limiter the middleware passes everything through.
#[derive(Clone)]
pub struct RateLimitMiddleware {
    limiter: Option<Arc<dyn RateLimiter>>,
    methods: Option<Vec<Method>>,
    trust_forwarded: bool,
}

impl RateLimitMiddleware {
    pub fn new(limiter: Option<Arc<dyn RateLimiter>>) -> Self {
        Self {
            limiter,
            methods: None,
            trust_forwarded: false,
        }
    }

    /// Key on `Forwarded`/`X-Forwarded-For`. Only safe behind a proxy that
    /// overwrites those headers.
    pub fn trust_forwarded(mut self, trust: bool) -> Self {
        self.trust_forwarded = trust;
        self
    }

    /// Only count requests with this method.
    pub fn only(mut self, method: Method) -> Self {
        self.methods.get_or_insert_with(Vec::new).push(method);
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimitMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RateLimitMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddlewareService {
            service: Rc::new(service),
            limiter: self.limiter.clone(),
            methods: self.methods.clone(),
            trust_forwarded: self.trust_forwarded,
        }))
    }
}

pub struct RateLimitMiddlewareService<S> {
    service: Rc<S>,
    limiter: Option<Arc<dyn RateLimiter>>,
    methods: Option<Vec<Method>>,
    trust_forwarded: bool,
}

impl<S> RateLimitMiddlewareService<S> {
    fn applies_to(&self, method: &Method) -> bool {
        self.methods
            .as_ref()
            .is_none_or(|methods| methods.contains(method))
    }

    fn client_ip(&self, req: &ServiceRequest) -> String {
        if self.trust_forwarded {
            if let Some(ip) = req.connection_info().realip_remote_addr() {
                return ip.to_string();
            }
        }
        req.peer_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let limiter = match &self.limiter {
            Some(limiter) if self.applies_to(req.method()) => Arc::clone(limiter),
            _ => {
                return Box::pin(async move {
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                });
            }
        };

        let key = format!("{}:{}", req.path(), self.client_ip(&req));

        Box::pin(async move {
            match limiter.check(&key).await {
                Ok(result) if !result.allowed => {
                    let retry_after = result.reset_after.as_secs().max(1);
                    tracing::warn!(key = %key, retry_after, "Rate limit exceeded");

                    let mut body = ErrorResponse::too_many_requests(retry_after);
                    if let Some(id) = req.extensions().get::<RequestId>() {
                        body = body.with_request_id(id.as_str());
                    }

                    let response = HttpResponse::TooManyRequests()
                        .insert_header(("X-RateLimit-Remaining", "0"))
                        .insert_header(("Retry-After", retry_after.to_string()))
                        .json(body);

                    return Ok(req.into_response(response).map_into_right_body());
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = %e, "Rate limiter error, failing open"),
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, http::StatusCode, test, web};
    use async_trait::async_trait;
    use folio_core::ports::{RateLimitError, RateLimitResult};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    /// Allows the first `limit` checks, then refuses.
    struct CountingLimiter {
        limit: u32,
        seen: AtomicU32,
    }

    #[async_trait]
    impl RateLimiter for CountingLimiter {
        async fn check(&self, _key: &str) -> Result<RateLimitResult, RateLimitError> {
            let n = self.seen.fetch_add(1, Ordering::SeqCst);
            Ok(RateLimitResult {
                allowed: n < self.limit,
                reset_after: Duration::from_secs(30),
            })
        }
    }

    fn limiter(limit: u32) -> Arc<dyn RateLimiter> {
        Arc::new(CountingLimiter {
            limit,
            seen: AtomicU32::new(0),
        })
    }

    #[actix_web::test]
    async fn refuses_once_budget_is_spent() {
        let app = test::init_service(
            App::new().service(
                web::resource("/limited")
                    .wrap(RateLimitMiddleware::new(Some(limiter(1))))
                    .route(web::post().to(HttpResponse::Ok)),
            ),
        )
        .await;

        let first = test::call_service(&app, test::TestRequest::post().uri("/limited").to_request()).await;
        assert_eq!(first.status(), StatusCode::OK);

        let second = test::call_service(&app, test::TestRequest::post().uri("/limited").to_request()).await;
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(second.headers().get("Retry-After").unwrap(), "30");
    }

    #[actix_web::test]
    async fn method_filter_skips_reads() {
        let app = test::init_service(
            App::new().service(
                web::resource("/contacts")
                    .wrap(RateLimitMiddleware::new(Some(limiter(0))).only(Method::POST))
                    .route(web::get().to(HttpResponse::Ok))
                    .route(web::post().to(HttpResponse::Created)),
            ),
        )
        .await;

        let read = test::call_service(&app, test::TestRequest::get().uri("/contacts").to_request()).await;
        assert_eq!(read.status(), StatusCode::OK);

        let write = test::call_service(&app, test::TestRequest::post().uri("/contacts").to_request()).await;
        assert_eq!(write.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    /// Refuses every key it has already seen.
    struct OncePerKey {
        seen: std::sync::Mutex<Vec<String>>,
    }

    #[async_trait]
    impl RateLimiter for OncePerKey {
        async fn check(&self, key: &str) -> Result<RateLimitResult, RateLimitError> {
            let mut seen = self.seen.lock().unwrap();
            let allowed = !seen.iter().any(|k| k == key);
            seen.push(key.to_string());
            Ok(RateLimitResult {
                allowed,
                reset_after: Duration::from_secs(30),
            })
        }
    }

    fn once_per_key() -> Arc<dyn RateLimiter> {
        Arc::new(OncePerKey {
            seen: std::sync::Mutex::new(Vec::new()),
        })
    }

    fn from_peer(forwarded_for: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/login")
            .peer_addr("203.0.113.9:40000".parse().unwrap())
            .insert_header(("X-Forwarded-For", forwarded_for))
    }

    #[actix_web::test]
    async fn spoofed_forwarded_for_shares_the_peer_budget() {
        let app = test::init_service(
            App::new().service(
                web::resource("/login")
                    .wrap(RateLimitMiddleware::new(Some(once_per_key())))
                    .route(web::post().to(HttpResponse::Ok)),
            ),
        )
        .await;

        let first = test::call_service(&app, from_peer("10.0.0.1").to_request()).await;
        assert_eq!(first.status(), StatusCode::OK);

        let second = test::call_service(&app, from_peer("10.0.0.2").to_request()).await;
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[actix_web::test]
    async fn trusted_proxy_keys_on_forwarded_for() {
        let app = test::init_service(
            App::new().service(
                web::resource("/login")
                    .wrap(RateLimitMiddleware::new(Some(once_per_key())).trust_forwarded(true))
                    .route(web::post().to(HttpResponse::Ok)),
            ),
        )
        .await;

        let first = test::call_service(&app, from_peer("10.0.0.1").to_request()).await;
        assert_eq!(first.status(), StatusCode::OK);

        let other_client = test::call_service(&app, from_peer("10.0.0.2").to_request()).await;
        assert_eq!(other_client.status(), StatusCode::OK);
    }
}
