//! # Folio API Server
//!
//! Actix-web front for the portfolio CMS: public content reads, the admin
//! editing API, uploads and the gated admin bundle.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;

use actix_web::web;

use middleware::error::{json_config, path_config, query_config};
use state::AppState;

/// Register shared state, extractor configs and every route.
pub fn configure_app(cfg: &mut web::ServiceConfig, state: AppState) {
    cfg.app_data(web::Data::new(state.clone()))
        .app_data(json_config())
        .app_data(path_config())
        .app_data(query_config());

    handlers::configure_routes(cfg, &state);
}
