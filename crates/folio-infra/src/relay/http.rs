//! Forwards contact submissions to an external form endpoint as JSON.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use folio_core::domain::ContactMessage;
use folio_core::ports::{FormRelay, RelayError};

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub url: String,
    /// Sent as `access_key` when the endpoint needs one.
    pub access_key: Option<String>,
    pub timeout: Duration,
}

#[derive(Serialize)]
struct RelayPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_key: Option<&'a str>,
    name: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    organization: Option<&'a str>,
    subject: &'a str,
    message: &'a str,
}

pub struct HttpFormRelay {
    config: RelayConfig,
    client: reqwest::Client,
}

impl HttpFormRelay {
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RelayError::Request(e.to_string()))?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl FormRelay for HttpFormRelay {
    async fn forward(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let payload = RelayPayload {
            access_key: self.config.access_key.as_deref(),
            name: &message.name,
            email: &message.email,
            phone: message.phone.as_deref(),
            organization: message.organization.as_deref(),
            subject: &message.subject,
            message: &message.message,
        };

        let response = self
            .client
            .post(&self.config.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| RelayError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Rejected(status.as_u16()));
        }

        tracing::debug!(message_id = %message.id, "Contact message relayed");
        Ok(())
    }
}
