//! Inbound contact messages: public submission plus the admin inbox.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{ContactFlags, ContactInput, ContactMessage, mask_email};
use crate::error::DomainError;
use crate::ports::{ContactFilter, ContactRepository, FormRelay};

const ENTITY: &str = "Contact message";

pub struct ContactService {
    messages: Arc<dyn ContactRepository>,
    relay: Arc<dyn FormRelay>,
}

impl ContactService {
    pub fn new(messages: Arc<dyn ContactRepository>, relay: Arc<dyn FormRelay>) -> Self {
        Self { messages, relay }
    }

    /// Store a public submission, then hand it to the form relay.
    /// A relay failure is logged; the stored message is still returned.
    pub async fn submit(&self, input: ContactInput) -> Result<ContactMessage, DomainError> {
        let message = ContactMessage::create(input, Utc::now())?;
        let saved = self.messages.insert(message).await?;

        tracing::info!(
            message_id = %saved.id,
            from = %mask_email(&saved.email),
            "Contact message received"
        );

        if let Err(e) = self.relay.forward(&saved).await {
            tracing::warn!(message_id = %saved.id, error = %e, "Form relay failed");
        }

        Ok(saved)
    }

    pub async fn list(&self, filter: ContactFilter) -> Result<Vec<ContactMessage>, DomainError> {
        Ok(self.messages.list(filter).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<ContactMessage, DomainError> {
        self.messages
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    pub async fn update_flags(
        &self,
        id: Uuid,
        flags: ContactFlags,
    ) -> Result<ContactMessage, DomainError> {
        let mut message = self.get(id).await?;
        message.apply_flags(flags);
        Ok(self.messages.update(message).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.get(id).await?;
        self.messages.delete(id).await?;
        tracing::info!(message_id = %id, "Contact message deleted");
        Ok(())
    }
}
