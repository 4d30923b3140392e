//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use folio_infra::{DatabaseConfig, JwtConfig};

use crate::telemetry::TelemetryConfig;

/// Credentials for the account created on first start.
#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct FormRelaySettings {
    pub url: String,
    pub access_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RateLimitSettings {
    pub max_requests: u32,
    pub window: Duration,
    /// Key clients on forwarding headers set by a trusted reverse proxy.
    pub trust_proxy_headers: bool,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    pub upload_dir: PathBuf,
    pub public_upload_prefix: String,
    pub admin_bundle_dir: Option<PathBuf>,
    pub admin: Option<AdminBootstrap>,
    pub form_relay: Option<FormRelaySettings>,
    pub rate_limit: RateLimitSettings,
    /// Mark the session cookie `Secure` (HTTPS only).
    pub cookie_secure: bool,
    pub telemetry: TelemetryConfig,
}

fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    var(name).and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn flag(name: &str, default: bool) -> bool {
    var(name)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = var("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: parsed("DB_MAX_CONNECTIONS", 20),
            min_connections: parsed("DB_MIN_CONNECTIONS", 2),
        });

        let jwt_defaults = JwtConfig::default();
        let jwt = JwtConfig {
            secret: var("JWT_SECRET").unwrap_or(jwt_defaults.secret),
            expiration_hours: parsed("JWT_EXPIRATION_HOURS", jwt_defaults.expiration_hours),
            issuer: var("JWT_ISSUER").unwrap_or(jwt_defaults.issuer),
        };

        let admin = match (var("ADMIN_EMAIL"), var("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminBootstrap { email, password }),
            _ => None,
        };

        let form_relay = var("FORM_RELAY_URL").map(|url| FormRelaySettings {
            url,
            access_key: var("FORM_RELAY_ACCESS_KEY"),
        });

        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parsed("PORT", 8080),
            database,
            jwt,
            upload_dir: var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("uploads")),
            public_upload_prefix: var("PUBLIC_UPLOAD_PREFIX")
                .unwrap_or_else(|| "/uploads".to_string()),
            admin_bundle_dir: var("ADMIN_BUNDLE_DIR").map(PathBuf::from),
            admin,
            form_relay,
            rate_limit: RateLimitSettings {
                max_requests: parsed("RATE_LIMIT_MAX_REQUESTS", 5),
                window: Duration::from_secs(parsed("RATE_LIMIT_WINDOW_SECS", 60)),
                trust_proxy_headers: flag("TRUST_PROXY_HEADERS", false),
            },
            cookie_secure: flag("COOKIE_SECURE", false),
            telemetry: TelemetryConfig::from_env(),
        }
    }
}
