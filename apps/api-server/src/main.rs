//! # Folio API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer};
use tracing_actix_web::TracingLogger;

use api_server::config::AppConfig;
use api_server::observability::RequestIdMiddleware;
use api_server::state::AppState;
use api_server::telemetry::init_telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_telemetry(&config.telemetry);

    tracing::info!(
        "Starting Folio API Server on {}:{}",
        config.host,
        config.port
    );

    tokio::fs::create_dir_all(&config.upload_dir).await?;
    if config.admin_bundle_dir.is_none() {
        tracing::warn!("ADMIN_BUNDLE_DIR not set - /admin will return 404");
    }

    let state = AppState::new(&config).await;

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .configure(move |cfg| api_server::configure_app(cfg, state))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
