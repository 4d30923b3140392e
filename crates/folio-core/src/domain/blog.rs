use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fields::{double_option, merge_optional, merge_required, optional, require};
use crate::error::DomainError;
use crate::slug::{is_valid_slug, slugify};

/// Blog post entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    /// Sanitized-by-editor HTML.
    pub content: String,
    pub cover_image: Option<String>,
    pub published: bool,
    /// Set once, on the first transition to published.
    pub published_at: Option<DateTime<Utc>>,
    pub views: i64,
    pub author_id: Uuid,
    pub category_id: Option<Uuid>,
    pub tag_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload for a blog post. Every field is optional so the
/// same shape serves partial updates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostInput {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub published: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<Uuid>>,
    pub tag_ids: Option<Vec<Uuid>>,
}

impl BlogPost {
    pub fn create(
        author_id: Uuid,
        input: BlogPostInput,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let title = require("Title", input.title)?;
        let content = require("Content", input.content)?;
        let slug = resolve_slug(input.slug, &title)?;

        let mut post = Self {
            id: Uuid::new_v4(),
            title,
            slug,
            excerpt: optional(input.excerpt),
            content,
            cover_image: optional(input.cover_image),
            published: false,
            published_at: None,
            views: 0,
            author_id,
            category_id: input.category_id.flatten(),
            tag_ids: distinct_tags(input.tag_ids.unwrap_or_default()),
            created_at: now,
            updated_at: now,
        };
        post.set_published(input.published.unwrap_or(false), now);
        Ok(post)
    }

    /// Merge the provided fields over this post.
    pub fn apply(&mut self, input: BlogPostInput, now: DateTime<Utc>) -> Result<(), DomainError> {
        merge_required(&mut self.title, "Title", input.title)?;
        merge_required(&mut self.content, "Content", input.content)?;
        if let Some(slug) = optional(input.slug) {
            if !is_valid_slug(&slug) {
                return Err(invalid_slug(&slug));
            }
            self.slug = slug;
        }
        merge_optional(&mut self.excerpt, input.excerpt);
        merge_optional(&mut self.cover_image, input.cover_image);
        if let Some(category_id) = input.category_id {
            self.category_id = category_id;
        }
        if let Some(tag_ids) = input.tag_ids {
            self.tag_ids = distinct_tags(tag_ids);
        }
        if let Some(published) = input.published {
            self.set_published(published, now);
        }
        self.updated_at = now;
        Ok(())
    }

    /// Flip the published flag. The publish timestamp is recorded the
    /// first time the post goes live and is never changed afterwards.
    pub fn set_published(&mut self, published: bool, now: DateTime<Utc>) {
        if published && self.published_at.is_none() {
            self.published_at = Some(now);
        }
        self.published = published;
    }
}

/// Blog category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Blog tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a category or tag.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyInput {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
}

impl Category {
    pub fn create(input: TaxonomyInput, now: DateTime<Utc>) -> Result<Self, DomainError> {
        let name = require("Name", input.name)?;
        let slug = resolve_slug(input.slug, &name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            slug,
            description: optional(input.description),
            created_at: now,
        })
    }
}

impl Tag {
    pub fn create(input: TaxonomyInput, now: DateTime<Utc>) -> Result<Self, DomainError> {
        let name = require("Name", input.name)?;
        let slug = resolve_slug(input.slug, &name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            slug,
            created_at: now,
        })
    }
}

/// Use the explicit slug when given, otherwise derive one from the title.
pub(crate) fn resolve_slug(explicit: Option<String>, title: &str) -> Result<String, DomainError> {
    let slug = optional(explicit).unwrap_or_else(|| slugify(title));
    if slug.is_empty() {
        return Err(DomainError::validation(
            "Slug could not be derived from the title",
        ));
    }
    if !is_valid_slug(&slug) {
        return Err(invalid_slug(&slug));
    }
    Ok(slug)
}

/// Drop repeated tag IDs, keeping the first occurrence's position.
fn distinct_tags(tag_ids: Vec<Uuid>) -> Vec<Uuid> {
    let mut seen = HashSet::with_capacity(tag_ids.len());
    tag_ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

fn invalid_slug(slug: &str) -> DomainError {
    DomainError::validation(format!(
        "Invalid slug '{slug}': use lowercase letters, digits and single hyphens"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn input(title: &str) -> BlogPostInput {
        BlogPostInput {
            title: Some(title.into()),
            content: Some("<p>hello</p>".into()),
            ..Default::default()
        }
    }

    #[test]
    fn create_derives_slug_and_stays_unpublished() {
        let post = BlogPost::create(Uuid::new_v4(), input("Test Post"), Utc::now()).unwrap();
        assert_eq!(post.slug, "test-post");
        assert!(!post.published);
        assert!(post.published_at.is_none());
        assert_eq!(post.views, 0);
    }

    #[test]
    fn create_requires_title_and_content() {
        let missing_content = BlogPostInput {
            title: Some("Title".into()),
            ..Default::default()
        };
        assert!(matches!(
            BlogPost::create(Uuid::new_v4(), missing_content, Utc::now()),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn create_rejects_malformed_slug() {
        let mut bad = input("Title");
        bad.slug = Some("Not A Slug".into());
        assert!(BlogPost::create(Uuid::new_v4(), bad, Utc::now()).is_err());
    }

    #[test]
    fn create_published_sets_timestamp() {
        let now = Utc::now();
        let mut live = input("Live");
        live.published = Some(true);
        let post = BlogPost::create(Uuid::new_v4(), live, now).unwrap();
        assert_eq!(post.published_at, Some(now));
    }

    #[test]
    fn published_at_is_set_exactly_once() {
        let t0 = Utc::now();
        let mut post = BlogPost::create(Uuid::new_v4(), input("Once"), t0).unwrap();

        let t1 = t0 + Duration::minutes(1);
        post.set_published(true, t1);
        assert_eq!(post.published_at, Some(t1));

        // Still published: untouched.
        post.set_published(true, t1 + Duration::minutes(1));
        assert_eq!(post.published_at, Some(t1));

        // Unpublish and republish: untouched.
        post.set_published(false, t1 + Duration::minutes(2));
        post.set_published(true, t1 + Duration::minutes(3));
        assert_eq!(post.published_at, Some(t1));
        assert!(post.published);
    }

    #[test]
    fn apply_merges_only_provided_fields() {
        let now = Utc::now();
        let mut post = BlogPost::create(Uuid::new_v4(), input("Original"), now).unwrap();
        post.excerpt = Some("keep me".into());

        let patch: BlogPostInput =
            serde_json::from_str(r#"{"title":"Renamed","categoryId":null}"#).unwrap();
        post.apply(patch, now).unwrap();

        assert_eq!(post.title, "Renamed");
        assert_eq!(post.slug, "original");
        assert_eq!(post.excerpt.as_deref(), Some("keep me"));
        assert_eq!(post.category_id, None);
    }

    #[test]
    fn category_id_absent_vs_null() {
        let absent: BlogPostInput = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.category_id, None);

        let null: BlogPostInput = serde_json::from_str(r#"{"categoryId":null}"#).unwrap();
        assert_eq!(null.category_id, Some(None));
    }

    #[test]
    fn taxonomy_slug_from_name() {
        let cat = Category::create(
            TaxonomyInput {
                name: Some("AI & Technology".into()),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap();
        assert_eq!(cat.slug, "ai-technology");
    }

    #[test]
    fn repeated_tag_ids_collapse_in_first_seen_order() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let tagged = BlogPostInput {
            tag_ids: Some(vec![a, b, a, a, b]),
            ..input("Tagged")
        };
        let mut post = BlogPost::create(Uuid::new_v4(), tagged, Utc::now()).unwrap();
        assert_eq!(post.tag_ids, vec![a, b]);

        let retag = BlogPostInput {
            tag_ids: Some(vec![b, b, a]),
            ..Default::default()
        };
        post.apply(retag, Utc::now()).unwrap();
        assert_eq!(post.tag_ids, vec![b, a]);
    }
}
