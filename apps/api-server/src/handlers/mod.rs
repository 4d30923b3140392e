//! HTTP handlers and route configuration.

mod admin;
mod auth;
mod blog;
mod contacts;
mod health;
mod pages;
mod portfolio;
mod talks;
mod taxonomy;
mod upload;

use std::path::PathBuf;

use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::http::Method;
use actix_web::{HttpResponse, web};
use folio_shared::ErrorResponse;

use crate::middleware::admin_gate::AdminGate;
use crate::middleware::rate_limit::RateLimitMiddleware;
use crate::state::AppState;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig, state: &AppState) {
    let limiter = state.rate_limiter.clone();
    let trust_forwarded = state.site.trust_proxy_headers;

    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .service(
                        web::resource("/login")
                            .wrap(RateLimitMiddleware::new(limiter.clone()).trust_forwarded(trust_forwarded))
                            .route(web::post().to(auth::login)),
                    )
                    .route("/logout", web::post().to(auth::logout))
                    .route("/me", web::get().to(auth::me)),
            )
            .service(
                web::scope("/admin")
                    .route("/change-password", web::post().to(admin::change_password))
                    .route("/stats", web::get().to(admin::stats)),
            )
            // Singleton pages
            .service(
                web::resource("/home")
                    .route(web::get().to(pages::get_home))
                    .route(web::put().to(pages::update_home)),
            )
            .service(
                web::resource("/about")
                    .route(web::get().to(pages::get_about))
                    .route(web::put().to(pages::update_about)),
            )
            .service(
                web::resource("/contact-page")
                    .route(web::get().to(pages::get_contact_page))
                    .route(web::put().to(pages::save_contact_page))
                    .route(web::post().to(pages::save_contact_page)),
            )
            // Collections
            .service(
                web::scope("/blog")
                    .service(
                        web::resource("")
                            .route(web::get().to(blog::list))
                            .route(web::post().to(blog::create)),
                    )
                    .route("/slug/{slug}", web::get().to(blog::get_by_slug))
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(blog::get))
                            .route(web::put().to(blog::update))
                            .route(web::delete().to(blog::delete)),
                    ),
            )
            .service(
                web::scope("/portfolio")
                    .service(
                        web::resource("")
                            .route(web::get().to(portfolio::list))
                            .route(web::post().to(portfolio::create)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(portfolio::get))
                            .route(web::put().to(portfolio::update))
                            .route(web::delete().to(portfolio::delete)),
                    ),
            )
            .service(
                web::scope("/talks")
                    .service(
                        web::resource("")
                            .route(web::get().to(talks::list))
                            .route(web::post().to(talks::create)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(talks::get))
                            .route(web::put().to(talks::update))
                            .route(web::delete().to(talks::delete)),
                    ),
            )
            .service(
                web::scope("/contacts")
                    .service(
                        web::resource("")
                            .wrap(
                                RateLimitMiddleware::new(limiter)
                                    .trust_forwarded(trust_forwarded)
                                    .only(Method::POST),
                            )
                            .route(web::get().to(contacts::list))
                            .route(web::post().to(contacts::submit)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(contacts::get))
                            .route(web::patch().to(contacts::update))
                            .route(web::delete().to(contacts::delete)),
                    ),
            )
            .service(
                web::resource("/categories")
                    .route(web::get().to(taxonomy::list_categories))
                    .route(web::post().to(taxonomy::create_category)),
            )
            .service(
                web::resource("/tags")
                    .route(web::get().to(taxonomy::list_tags))
                    .route(web::post().to(taxonomy::create_tag)),
            )
            .route("/upload", web::post().to(upload::upload_image))
            .default_service(web::to(api_not_found)),
    );

    cfg.service(Files::new(&state.site.public_upload_prefix, &state.site.upload_dir));

    let admin = web::scope("/admin").wrap(AdminGate::new(state.tokens.clone()));
    match &state.site.admin_bundle_dir {
        Some(dir) => cfg.service(admin.service(admin_bundle(dir.clone()))),
        None => cfg.service(admin.default_service(web::to(admin_bundle_missing))),
    };
}

/// Static admin bundle; unknown paths fall back to `index.html` so the
/// client-side router can take them.
fn admin_bundle(dir: PathBuf) -> Files {
    let index = dir.join("index.html");

    Files::new("/", dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(index).await?;
                let res = file.into_response(&req);
                Ok(ServiceResponse::new(req, res))
            }
        }))
}

async fn admin_bundle_missing() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::not_found("Admin bundle is not installed"))
}

async fn api_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::not_found("No such endpoint"))
}
