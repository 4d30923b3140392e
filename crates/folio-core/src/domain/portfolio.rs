use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::blog::resolve_slug;
use super::fields::{merge_optional, merge_required, optional, require};
use crate::error::DomainError;
use crate::slug::is_valid_slug;

/// Portfolio project entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProject {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub link: Option<String>,
    pub impact: Option<String>,
    pub images: Vec<String>,
    pub featured: bool,
    pub published: bool,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProjectInput {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub link: Option<String>,
    pub impact: Option<String>,
    pub images: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
    pub order: Option<i32>,
}

impl PortfolioProject {
    pub fn create(
        author_id: Uuid,
        input: PortfolioProjectInput,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let title = require("Title", input.title)?;
        let description = require("Description", input.description)?;
        let category = require("Category", input.category)?;
        let slug = resolve_slug(input.slug, &title)?;

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            slug,
            description,
            category,
            tags: input.tags.unwrap_or_default(),
            icon: optional(input.icon),
            color: optional(input.color),
            link: optional(input.link),
            impact: optional(input.impact),
            images: input.images.unwrap_or_default(),
            featured: input.featured.unwrap_or(false),
            // Projects go live immediately unless the editor says otherwise.
            published: input.published.unwrap_or(true),
            sort_order: input.order.unwrap_or(0),
            author_id,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply(
        &mut self,
        input: PortfolioProjectInput,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        merge_required(&mut self.title, "Title", input.title)?;
        merge_required(&mut self.description, "Description", input.description)?;
        merge_required(&mut self.category, "Category", input.category)?;
        if let Some(slug) = optional(input.slug) {
            if !is_valid_slug(&slug) {
                return Err(DomainError::validation(format!("Invalid slug '{slug}'")));
            }
            self.slug = slug;
        }
        if let Some(tags) = input.tags {
            self.tags = tags;
        }
        if let Some(images) = input.images {
            self.images = images;
        }
        merge_optional(&mut self.icon, input.icon);
        merge_optional(&mut self.color, input.color);
        merge_optional(&mut self.link, input.link);
        merge_optional(&mut self.impact, input.impact);
        if let Some(featured) = input.featured {
            self.featured = featured;
        }
        if let Some(published) = input.published {
            self.published = published;
        }
        if let Some(order) = input.order {
            self.sort_order = order;
        }
        self.updated_at = now;
        Ok(())
    }
}
