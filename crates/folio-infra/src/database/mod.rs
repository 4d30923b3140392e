//! Database connection management and SeaORM-backed repositories.

mod connections;

#[cfg(feature = "postgres")]
mod json;
#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use connections::DatabaseConnections;

#[cfg(feature = "postgres")]
pub use postgres_base::{PostgresBaseRepository, PostgresSingletonRepository};

#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresAboutPageRepository, PostgresBlogPostRepository, PostgresCategoryRepository,
    PostgresContactPageRepository, PostgresContactRepository, PostgresHomePageRepository,
    PostgresPortfolioRepository, PostgresTagRepository, PostgresTalkRepository,
    PostgresUserRepository,
};

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
