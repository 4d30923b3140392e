//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod rate_limit;
mod relay;
mod repository;
mod storage;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use rate_limit::{RateLimitError, RateLimitResult, RateLimiter};
pub use relay::{FormRelay, NoopFormRelay, RelayError};
pub use repository::{
    BaseRepository, BlogPostFilter, BlogPostRepository, CategoryRepository, ContactFilter,
    ContactRepository, PortfolioFilter, PortfolioRepository, SingletonRepository, TagRepository,
    TalkRepository, UserRepository,
};
pub use storage::{MediaStorage, StorageError, StoredMedia};
