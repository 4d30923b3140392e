use std::sync::Arc;

use chrono::Utc;

use crate::domain::{Category, Tag, TaxonomyInput};
use crate::error::DomainError;
use crate::ports::{CategoryRepository, TagRepository};

/// Blog categories and tags.
pub struct TaxonomyService {
    categories: Arc<dyn CategoryRepository>,
    tags: Arc<dyn TagRepository>,
}

impl TaxonomyService {
    pub fn new(categories: Arc<dyn CategoryRepository>, tags: Arc<dyn TagRepository>) -> Self {
        Self { categories, tags }
    }

    pub async fn categories(&self) -> Result<Vec<Category>, DomainError> {
        Ok(self.categories.list().await?)
    }

    pub async fn create_category(&self, input: TaxonomyInput) -> Result<Category, DomainError> {
        let category = Category::create(input, Utc::now())?;
        if self.categories.find_by_slug(&category.slug).await?.is_some() {
            return Err(DomainError::Duplicate(format!(
                "A category with slug '{}' already exists",
                category.slug
            )));
        }
        Ok(self.categories.insert(category).await?)
    }

    pub async fn tags(&self) -> Result<Vec<Tag>, DomainError> {
        Ok(self.tags.list().await?)
    }

    pub async fn create_tag(&self, input: TaxonomyInput) -> Result<Tag, DomainError> {
        let tag = Tag::create(input, Utc::now())?;
        if self.tags.find_by_slug(&tag.slug).await?.is_some() {
            return Err(DomainError::Duplicate(format!(
                "A tag with slug '{}' already exists",
                tag.slug
            )));
        }
        Ok(self.tags.insert(tag).await?)
    }
}
