//! Form relay port - forwards contact submissions to an external
//! form-handling service.

use async_trait::async_trait;

use crate::domain::ContactMessage;

#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn forward(&self, message: &ContactMessage) -> Result<(), RelayError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Relay request failed: {0}")]
    Request(String),

    #[error("Relay rejected submission with status {0}")]
    Rejected(u16),
}

/// Relay used when no external service is configured.
pub struct NoopFormRelay;

#[async_trait]
impl FormRelay for NoopFormRelay {
    async fn forward(&self, _message: &ContactMessage) -> Result<(), RelayError> {
        Ok(())
    }
}
