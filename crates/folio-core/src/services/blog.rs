//! Blog editing rules: slug uniqueness, taxonomy references, the
//! publish-once timestamp and the public view counter.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostInput, Category, Tag};
use crate::error::DomainError;
use crate::ports::{
    BlogPostFilter, BlogPostRepository, CategoryRepository, TagRepository, UserRepository,
};

const ENTITY: &str = "Blog post";

/// Public author fields shown next to a post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorSummary {
    pub name: Option<String>,
    pub email: String,
}

/// A post together with its resolved author, category and tags.
#[derive(Debug, Clone, Serialize)]
pub struct BlogPostDetails {
    #[serde(flatten)]
    pub post: BlogPost,
    pub author: Option<AuthorSummary>,
    pub category: Option<Category>,
    pub tags: Vec<Tag>,
}

pub struct BlogService {
    posts: Arc<dyn BlogPostRepository>,
    categories: Arc<dyn CategoryRepository>,
    tags: Arc<dyn TagRepository>,
    users: Arc<dyn UserRepository>,
}

impl BlogService {
    pub fn new(
        posts: Arc<dyn BlogPostRepository>,
        categories: Arc<dyn CategoryRepository>,
        tags: Arc<dyn TagRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            posts,
            categories,
            tags,
            users,
        }
    }

    pub async fn list(&self, published_only: bool) -> Result<Vec<BlogPostDetails>, DomainError> {
        let posts = self.posts.list(BlogPostFilter { published_only }).await?;
        self.with_relations(posts).await
    }

    /// Fetch by ID. Drafts are only visible when `include_drafts` is set.
    pub async fn get(&self, id: Uuid, include_drafts: bool) -> Result<BlogPostDetails, DomainError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .filter(|p| include_drafts || p.published)
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;
        self.details(post).await
    }

    /// Public read of a published post. Every call counts one view.
    pub async fn read_published(&self, slug: &str) -> Result<BlogPostDetails, DomainError> {
        let mut post = self
            .posts
            .find_by_slug(slug)
            .await?
            .filter(|p| p.published)
            .ok_or_else(|| DomainError::not_found(ENTITY, slug))?;

        self.posts.increment_views(post.id).await?;
        post.views += 1;

        self.details(post).await
    }

    pub async fn create(
        &self,
        author_id: Uuid,
        input: BlogPostInput,
    ) -> Result<BlogPostDetails, DomainError> {
        let post = BlogPost::create(author_id, input, Utc::now())?;
        self.ensure_slug_free(&post.slug, None).await?;
        self.check_references(&post).await?;

        let saved = self.posts.insert(post).await?;
        tracing::info!(post_id = %saved.id, slug = %saved.slug, "Blog post created");
        self.details(saved).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: BlogPostInput,
    ) -> Result<BlogPostDetails, DomainError> {
        let mut post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;

        let previous_slug = post.slug.clone();
        post.apply(input, Utc::now())?;
        if post.slug != previous_slug {
            self.ensure_slug_free(&post.slug, Some(id)).await?;
        }
        self.check_references(&post).await?;

        let saved = self.posts.update(post).await?;
        tracing::info!(post_id = %saved.id, published = saved.published, "Blog post updated");
        self.details(saved).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if self.posts.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found(ENTITY, id));
        }
        self.posts.delete(id).await?;
        tracing::info!(post_id = %id, "Blog post deleted");
        Ok(())
    }

    async fn ensure_slug_free(&self, slug: &str, exclude: Option<Uuid>) -> Result<(), DomainError> {
        match self.posts.find_by_slug(slug).await? {
            Some(existing) if Some(existing.id) != exclude => Err(DomainError::Duplicate(
                format!("A blog post with slug '{slug}' already exists"),
            )),
            _ => Ok(()),
        }
    }

    async fn check_references(&self, post: &BlogPost) -> Result<(), DomainError> {
        if let Some(category_id) = post.category_id {
            if self.categories.find_by_id(category_id).await?.is_none() {
                return Err(DomainError::validation(format!(
                    "Unknown category {category_id}"
                )));
            }
        }
        for tag_id in &post.tag_ids {
            if self.tags.find_by_id(*tag_id).await?.is_none() {
                return Err(DomainError::validation(format!("Unknown tag {tag_id}")));
            }
        }
        Ok(())
    }

    async fn details(&self, post: BlogPost) -> Result<BlogPostDetails, DomainError> {
        let mut resolved = self.with_relations(vec![post]).await?;
        resolved
            .pop()
            .ok_or_else(|| DomainError::Internal("post vanished while resolving".into()))
    }

    async fn with_relations(
        &self,
        posts: Vec<BlogPost>,
    ) -> Result<Vec<BlogPostDetails>, DomainError> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let categories: HashMap<Uuid, Category> = self
            .categories
            .list()
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();
        let tags: HashMap<Uuid, Tag> = self
            .tags
            .list()
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        let mut authors: HashMap<Uuid, Option<AuthorSummary>> = HashMap::new();
        let mut out = Vec::with_capacity(posts.len());
        for post in posts {
            if !authors.contains_key(&post.author_id) {
                let author = self
                    .users
                    .find_by_id(post.author_id)
                    .await?
                    .map(|u| AuthorSummary {
                        name: u.name,
                        email: u.email,
                    });
                authors.insert(post.author_id, author);
            }

            out.push(BlogPostDetails {
                author: authors.get(&post.author_id).cloned().flatten(),
                category: post.category_id.and_then(|id| categories.get(&id).cloned()),
                tags: post
                    .tag_ids
                    .iter()
                    .filter_map(|id| tags.get(id).cloned())
                    .collect(),
                post,
            });
        }
        Ok(out)
    }
}
