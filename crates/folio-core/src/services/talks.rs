use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Talk, TalkInput};
use crate::error::DomainError;
use crate::ports::TalkRepository;

const ENTITY: &str = "Talk";

pub struct TalkService {
    talks: Arc<dyn TalkRepository>,
}

impl TalkService {
    pub fn new(talks: Arc<dyn TalkRepository>) -> Self {
        Self { talks }
    }

    pub async fn list(&self, published_only: bool) -> Result<Vec<Talk>, DomainError> {
        Ok(self.talks.list(published_only).await?)
    }

    pub async fn get(&self, id: Uuid, include_drafts: bool) -> Result<Talk, DomainError> {
        self.talks
            .find_by_id(id)
            .await?
            .filter(|t| include_drafts || t.published)
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    pub async fn create(&self, input: TalkInput) -> Result<Talk, DomainError> {
        let talk = Talk::create(input, Utc::now())?;
        let saved = self.talks.insert(talk).await?;
        tracing::info!(talk_id = %saved.id, "Talk created");
        Ok(saved)
    }

    pub async fn update(&self, id: Uuid, input: TalkInput) -> Result<Talk, DomainError> {
        let mut talk = self
            .talks
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;

        talk.apply(input, Utc::now())?;
        let saved = self.talks.update(talk).await?;
        tracing::info!(talk_id = %saved.id, status = saved.status.as_str(), "Talk updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if self.talks.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found(ENTITY, id));
        }
        self.talks.delete(id).await?;
        tracing::info!(talk_id = %id, "Talk deleted");
        Ok(())
    }
}
