//! In-memory repositories - used when no database is configured, and as
//! test doubles.
//!
//! Note: data is lost on process restart.

mod repos;
mod store;

pub use repos::{
    InMemoryBlogPostRepository, InMemoryCategoryRepository, InMemoryContactRepository,
    InMemoryPortfolioRepository, InMemoryTagRepository, InMemoryTalkRepository,
    InMemoryUserRepository,
};
pub use store::{InMemoryRepository, InMemorySingleton};
