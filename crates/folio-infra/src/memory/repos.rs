//! Query methods for each in-memory collection.

use std::cmp::Reverse;

use async_trait::async_trait;
use uuid::Uuid;

use folio_core::domain::{
    BlogPost, Category, ContactMessage, PortfolioProject, Tag, Talk, User,
};
use folio_core::error::RepoError;
use folio_core::ports::{
    BlogPostFilter, BlogPostRepository, CategoryRepository, ContactFilter, ContactRepository,
    PortfolioFilter, PortfolioRepository, TagRepository, TalkRepository, UserRepository,
};

use super::store::{InMemoryRepository, Keyed};

pub type InMemoryUserRepository = InMemoryRepository<User>;
pub type InMemoryBlogPostRepository = InMemoryRepository<BlogPost>;
pub type InMemoryPortfolioRepository = InMemoryRepository<PortfolioProject>;
pub type InMemoryTalkRepository = InMemoryRepository<Talk>;
pub type InMemoryContactRepository = InMemoryRepository<ContactMessage>;
pub type InMemoryCategoryRepository = InMemoryRepository<Category>;
pub type InMemoryTagRepository = InMemoryRepository<Tag>;

impl Keyed for User {
    fn id(&self) -> Uuid {
        self.id
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.email)
    }
}

impl Keyed for BlogPost {
    fn id(&self) -> Uuid {
        self.id
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.slug)
    }

    fn keep_stored(&mut self, stored: &Self) {
        self.views = stored.views;
    }
}

impl Keyed for PortfolioProject {
    fn id(&self) -> Uuid {
        self.id
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.slug)
    }
}

impl Keyed for Category {
    fn id(&self) -> Uuid {
        self.id
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.slug)
    }
}

impl Keyed for Tag {
    fn id(&self) -> Uuid {
        self.id
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.slug)
    }
}

impl Keyed for Talk {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Keyed for ContactMessage {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self.find_by_key(email).await)
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn list(&self, filter: BlogPostFilter) -> Result<Vec<BlogPost>, RepoError> {
        let mut posts: Vec<BlogPost> = self
            .snapshot()
            .await
            .into_iter()
            .filter(|p| !filter.published_only || p.published)
            .collect();
        posts.sort_by_key(|p| Reverse(p.created_at));
        Ok(posts)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepoError> {
        Ok(self.find_by_key(slug).await)
    }

    async fn increment_views(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let post = rows.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.views += 1;
        Ok(())
    }

    async fn count(&self, published_only: bool) -> Result<u64, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|p| !published_only || p.published)
            .count() as u64)
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolioRepository {
    async fn list(&self, filter: PortfolioFilter) -> Result<Vec<PortfolioProject>, RepoError> {
        let mut projects: Vec<PortfolioProject> = self
            .snapshot()
            .await
            .into_iter()
            .filter(|p| !filter.published_only || p.published)
            .filter(|p| !filter.featured_only || p.featured)
            .collect();
        projects.sort_by_key(|p| (p.sort_order, Reverse(p.created_at)));
        Ok(projects)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PortfolioProject>, RepoError> {
        Ok(self.find_by_key(slug).await)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.rows.read().await.len() as u64)
    }
}

#[async_trait]
impl TalkRepository for InMemoryTalkRepository {
    async fn list(&self, published_only: bool) -> Result<Vec<Talk>, RepoError> {
        let mut talks: Vec<Talk> = self
            .snapshot()
            .await
            .into_iter()
            .filter(|t| !published_only || t.published)
            .collect();
        talks.sort_by_key(|t| Reverse(t.date));
        Ok(talks)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.rows.read().await.len() as u64)
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list(&self, filter: ContactFilter) -> Result<Vec<ContactMessage>, RepoError> {
        let mut messages: Vec<ContactMessage> = self
            .snapshot()
            .await
            .into_iter()
            .filter(|m| filter.read.is_none_or(|read| m.read == read))
            .filter(|m| filter.replied.is_none_or(|replied| m.replied == replied))
            .collect();
        messages.sort_by_key(|m| Reverse(m.created_at));
        Ok(messages)
    }

    async fn count(&self, unread_only: bool) -> Result<u64, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.values().filter(|m| !unread_only || !m.read).count() as u64)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, RepoError> {
        let mut categories = self.snapshot().await;
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepoError> {
        Ok(self.find_by_key(slug).await)
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn list(&self) -> Result<Vec<Tag>, RepoError> {
        let mut tags = self.snapshot().await;
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tag>, RepoError> {
        Ok(self.find_by_key(slug).await)
    }
}
