use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{PortfolioProject, PortfolioProjectInput};
use crate::error::DomainError;
use crate::ports::{PortfolioFilter, PortfolioRepository};

const ENTITY: &str = "Portfolio project";

pub struct PortfolioService {
    projects: Arc<dyn PortfolioRepository>,
}

impl PortfolioService {
    pub fn new(projects: Arc<dyn PortfolioRepository>) -> Self {
        Self { projects }
    }

    pub async fn list(&self, filter: PortfolioFilter) -> Result<Vec<PortfolioProject>, DomainError> {
        Ok(self.projects.list(filter).await?)
    }

    pub async fn get(&self, id: Uuid, include_drafts: bool) -> Result<PortfolioProject, DomainError> {
        self.projects
            .find_by_id(id)
            .await?
            .filter(|p| include_drafts || p.published)
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    pub async fn create(
        &self,
        author_id: Uuid,
        input: PortfolioProjectInput,
    ) -> Result<PortfolioProject, DomainError> {
        let project = PortfolioProject::create(author_id, input, Utc::now())?;
        self.ensure_slug_free(&project.slug, None).await?;

        let saved = self.projects.insert(project).await?;
        tracing::info!(project_id = %saved.id, slug = %saved.slug, "Portfolio project created");
        Ok(saved)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: PortfolioProjectInput,
    ) -> Result<PortfolioProject, DomainError> {
        let mut project = self
            .projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;

        let previous_slug = project.slug.clone();
        project.apply(input, Utc::now())?;
        if project.slug != previous_slug {
            self.ensure_slug_free(&project.slug, Some(id)).await?;
        }

        let saved = self.projects.update(project).await?;
        tracing::info!(project_id = %saved.id, "Portfolio project updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if self.projects.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found(ENTITY, id));
        }
        self.projects.delete(id).await?;
        tracing::info!(project_id = %id, "Portfolio project deleted");
        Ok(())
    }

    async fn ensure_slug_free(&self, slug: &str, exclude: Option<Uuid>) -> Result<(), DomainError> {
        match self.projects.find_by_slug(slug).await? {
            Some(existing) if Some(existing.id) != exclude => Err(DomainError::Duplicate(
                format!("A portfolio project with slug '{slug}' already exists"),
            )),
            _ => Ok(()),
        }
    }
}
