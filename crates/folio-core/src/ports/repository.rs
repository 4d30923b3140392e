use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    BlogPost, Category, ContactMessage, PortfolioProject, Tag, Talk, User,
};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity. Unique-key collisions surface as
    /// [`RepoError::Constraint`].
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Overwrite an existing entity. Fails with [`RepoError::NotFound`]
    /// when no row has the entity's ID.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BlogPostFilter {
    pub published_only: bool,
}

/// Blog posts, newest first.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, Uuid> {
    async fn list(&self, filter: BlogPostFilter) -> Result<Vec<BlogPost>, RepoError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepoError>;

    /// Atomically bump the view counter by one.
    async fn increment_views(&self, id: Uuid) -> Result<(), RepoError>;

    async fn count(&self, published_only: bool) -> Result<u64, RepoError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PortfolioFilter {
    pub published_only: bool,
    pub featured_only: bool,
}

/// Portfolio projects by sort order, then newest first.
#[async_trait]
pub trait PortfolioRepository: BaseRepository<PortfolioProject, Uuid> {
    async fn list(&self, filter: PortfolioFilter) -> Result<Vec<PortfolioProject>, RepoError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PortfolioProject>, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;
}

/// Talks, most recent date first.
#[async_trait]
pub trait TalkRepository: BaseRepository<Talk, Uuid> {
    async fn list(&self, published_only: bool) -> Result<Vec<Talk>, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFilter {
    pub read: Option<bool>,
    pub replied: Option<bool>,
}

/// Inbound contact messages, newest first.
#[async_trait]
pub trait ContactRepository: BaseRepository<ContactMessage, Uuid> {
    async fn list(&self, filter: ContactFilter) -> Result<Vec<ContactMessage>, RepoError>;

    async fn count(&self, unread_only: bool) -> Result<u64, RepoError>;
}

#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, Uuid> {
    async fn list(&self) -> Result<Vec<Category>, RepoError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepoError>;
}

#[async_trait]
pub trait TagRepository: BaseRepository<Tag, Uuid> {
    async fn list(&self) -> Result<Vec<Tag>, RepoError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tag>, RepoError>;
}

/// Storage for a page that exists as a single row.
#[async_trait]
pub trait SingletonRepository<T>: Send + Sync {
    /// The first (and normally only) row.
    async fn find_first(&self) -> Result<Option<T>, RepoError>;

    /// Update the row with the page's ID, inserting it when missing.
    async fn save(&self, page: T) -> Result<T, RepoError>;
}
