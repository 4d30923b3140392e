//! Application state - shared across all handlers.

use std::path::PathBuf;
use std::sync::Arc;

use folio_core::domain::{AboutPage, ContactPage, HomePage};
use folio_core::error::DomainError;
use folio_core::ports::{
    BlogPostRepository, CategoryRepository, ContactRepository, FormRelay, MediaStorage,
    NoopFormRelay, PasswordService, PortfolioRepository, RateLimiter, SingletonRepository,
    TagRepository, TalkRepository, TokenService, UserRepository,
};
use folio_core::services::{
    AccountService, BlogService, ContactService, MediaService, PageService, PortfolioService,
    StatsService, TalkService, TaxonomyService,
};
use folio_infra::memory::{
    InMemoryBlogPostRepository, InMemoryCategoryRepository, InMemoryContactRepository,
    InMemoryPortfolioRepository, InMemoryTagRepository, InMemoryTalkRepository,
    InMemoryUserRepository,
};
use folio_infra::{
    Argon2PasswordService, InMemorySingleton, JwtTokenService, LocalMediaStorage,
};

use crate::config::AppConfig;

/// Every storage port the services need.
#[derive(Clone)]
pub struct Repositories {
    /// `postgres` or `memory`, reported by the health check.
    pub backend: &'static str,
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn BlogPostRepository>,
    pub projects: Arc<dyn PortfolioRepository>,
    pub talks: Arc<dyn TalkRepository>,
    pub messages: Arc<dyn ContactRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub home: Arc<dyn SingletonRepository<HomePage>>,
    pub about: Arc<dyn SingletonRepository<AboutPage>>,
    pub contact_page: Arc<dyn SingletonRepository<ContactPage>>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            backend: "memory",
            users: Arc::new(InMemoryUserRepository::new()),
            posts: Arc::new(InMemoryBlogPostRepository::new()),
            projects: Arc::new(InMemoryPortfolioRepository::new()),
            talks: Arc::new(InMemoryTalkRepository::new()),
            messages: Arc::new(InMemoryContactRepository::new()),
            categories: Arc::new(InMemoryCategoryRepository::new()),
            tags: Arc::new(InMemoryTagRepository::new()),
            home: Arc::new(InMemorySingleton::<HomePage>::new()),
            about: Arc::new(InMemorySingleton::<AboutPage>::new()),
            contact_page: Arc::new(InMemorySingleton::<ContactPage>::new()),
        }
    }

    #[cfg(feature = "postgres")]
    pub fn postgres(connections: &folio_infra::DatabaseConnections) -> Self {
        use folio_infra::database::{
            PostgresAboutPageRepository, PostgresBlogPostRepository, PostgresCategoryRepository,
            PostgresContactPageRepository, PostgresContactRepository, PostgresHomePageRepository,
            PostgresPortfolioRepository, PostgresTagRepository, PostgresTalkRepository,
            PostgresUserRepository,
        };

        let db = &connections.main;
        Self {
            backend: "postgres",
            users: Arc::new(PostgresUserRepository::new(db.clone())),
            posts: Arc::new(PostgresBlogPostRepository::new(db.clone())),
            projects: Arc::new(PostgresPortfolioRepository::new(db.clone())),
            talks: Arc::new(PostgresTalkRepository::new(db.clone())),
            messages: Arc::new(PostgresContactRepository::new(db.clone())),
            categories: Arc::new(PostgresCategoryRepository::new(db.clone())),
            tags: Arc::new(PostgresTagRepository::new(db.clone())),
            home: Arc::new(PostgresHomePageRepository::new(db.clone())),
            about: Arc::new(PostgresAboutPageRepository::new(db.clone())),
            contact_page: Arc::new(PostgresContactPageRepository::new(db.clone())),
        }
    }
}

/// Adapters that sit outside the content store.
pub struct Adapters {
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
    pub storage: Arc<dyn MediaStorage>,
    pub relay: Arc<dyn FormRelay>,
    pub rate_limiter: Option<Arc<dyn RateLimiter>>,
}

/// Paths and flags the HTTP layer needs.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub upload_dir: PathBuf,
    pub public_upload_prefix: String,
    pub admin_bundle_dir: Option<PathBuf>,
    pub cookie_secure: bool,
    /// Rate-limit on the client IP reported by a reverse proxy.
    pub trust_proxy_headers: bool,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub blog: Arc<BlogService>,
    pub portfolio: Arc<PortfolioService>,
    pub talks: Arc<TalkService>,
    pub contacts: Arc<ContactService>,
    pub pages: Arc<PageService>,
    pub taxonomy: Arc<TaxonomyService>,
    pub media: Arc<MediaService>,
    pub stats: Arc<StatsService>,
    pub tokens: Arc<dyn TokenService>,
    pub rate_limiter: Option<Arc<dyn RateLimiter>>,
    pub storage_backend: &'static str,
    pub site: SiteSettings,
}

impl AppState {
    /// Wire services over the given repositories and adapters.
    pub fn assemble(repos: Repositories, adapters: Adapters, site: SiteSettings) -> Self {
        let storage_backend = repos.backend;
        Self {
            accounts: Arc::new(AccountService::new(
                repos.users.clone(),
                adapters.passwords,
                adapters.tokens.clone(),
            )),
            blog: Arc::new(BlogService::new(
                repos.posts.clone(),
                repos.categories.clone(),
                repos.tags.clone(),
                repos.users,
            )),
            portfolio: Arc::new(PortfolioService::new(repos.projects.clone())),
            talks: Arc::new(TalkService::new(repos.talks.clone())),
            contacts: Arc::new(ContactService::new(repos.messages.clone(), adapters.relay)),
            pages: Arc::new(PageService::new(repos.home, repos.about, repos.contact_page)),
            taxonomy: Arc::new(TaxonomyService::new(repos.categories, repos.tags)),
            media: Arc::new(MediaService::new(adapters.storage)),
            stats: Arc::new(StatsService::new(
                repos.posts,
                repos.projects,
                repos.talks,
                repos.messages,
            )),
            tokens: adapters.tokens,
            rate_limiter: adapters.rate_limiter,
            storage_backend,
            site,
        }
    }

    /// Build the application state from configuration.
    pub async fn new(config: &AppConfig) -> Self {
        let repos = Self::repositories(config).await;

        let adapters = Adapters {
            tokens: Arc::new(JwtTokenService::new(config.jwt.clone())),
            passwords: Arc::new(Argon2PasswordService::new()),
            storage: Arc::new(LocalMediaStorage::new(
                config.upload_dir.clone(),
                config.public_upload_prefix.clone(),
            )),
            relay: Self::form_relay(config),
            rate_limiter: Self::rate_limiter(config),
        };

        let site = SiteSettings {
            upload_dir: config.upload_dir.clone(),
            public_upload_prefix: config.public_upload_prefix.clone(),
            admin_bundle_dir: config.admin_bundle_dir.clone(),
            cookie_secure: config.cookie_secure,
            trust_proxy_headers: config.rate_limit.trust_proxy_headers,
        };

        let state = Self::assemble(repos, adapters, site);
        if let Err(e) = state.bootstrap(config).await {
            tracing::error!(error = %e, "Start-up seeding failed");
        }

        tracing::info!("Application state initialized");
        state
    }

    /// Make sure the singleton pages and the configured admin exist.
    pub async fn bootstrap(&self, config: &AppConfig) -> Result<(), DomainError> {
        self.pages.seed_missing().await?;

        match &config.admin {
            Some(admin) => {
                self.accounts
                    .ensure_admin(&admin.email, &admin.password)
                    .await?;
            }
            None => tracing::warn!(
                "ADMIN_EMAIL/ADMIN_PASSWORD not set - no admin account will be created"
            ),
        }
        Ok(())
    }

    #[cfg(feature = "postgres")]
    async fn repositories(config: &AppConfig) -> Repositories {
        use folio_infra::DatabaseConnections;

        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Repositories::in_memory();
        };

        match DatabaseConnections::init(db_config).await {
            Ok(connections) => Repositories::postgres(&connections),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Failed to connect to database. Using in-memory fallback."
                );
                Repositories::in_memory()
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn repositories(_config: &AppConfig) -> Repositories {
        tracing::info!("Running without postgres feature - using in-memory repositories");
        Repositories::in_memory()
    }

    #[cfg(feature = "relay")]
    fn form_relay(config: &AppConfig) -> Arc<dyn FormRelay> {
        use folio_infra::{HttpFormRelay, RelayConfig};

        let Some(settings) = config.form_relay.as_ref() else {
            return Arc::new(NoopFormRelay);
        };

        match HttpFormRelay::new(RelayConfig {
            url: settings.url.clone(),
            access_key: settings.access_key.clone(),
            timeout: std::time::Duration::from_secs(10),
        }) {
            Ok(relay) => {
                tracing::info!("Contact form relay enabled");
                Arc::new(relay)
            }
            Err(e) => {
                tracing::error!(error = %e, "Form relay unavailable");
                Arc::new(NoopFormRelay)
            }
        }
    }

    #[cfg(not(feature = "relay"))]
    fn form_relay(config: &AppConfig) -> Arc<dyn FormRelay> {
        if config.form_relay.is_some() {
            tracing::warn!("FORM_RELAY_URL set but the relay feature is disabled");
        }
        Arc::new(NoopFormRelay)
    }

    #[cfg(feature = "rate-limit")]
    fn rate_limiter(config: &AppConfig) -> Option<Arc<dyn RateLimiter>> {
        use folio_infra::{InMemoryRateLimiter, RateLimitConfig};

        Some(Arc::new(InMemoryRateLimiter::new(RateLimitConfig {
            max_requests: config.rate_limit.max_requests,
            window: config.rate_limit.window,
        })))
    }

    #[cfg(not(feature = "rate-limit"))]
    fn rate_limiter(_config: &AppConfig) -> Option<Arc<dyn RateLimiter>> {
        None
    }
}
