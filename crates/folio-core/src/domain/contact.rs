use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fields::{optional, require};
use crate::error::DomainError;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Inbound message from the public contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub subject: String,
    pub message: String,
    pub read: bool,
    pub replied: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Partial update of the inbox flags. The two flags are independent.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ContactFlags {
    pub read: Option<bool>,
    pub replied: Option<bool>,
}

impl ContactMessage {
    pub fn create(input: ContactInput, now: DateTime<Utc>) -> Result<Self, DomainError> {
        let name = require("Name", input.name)?;
        let email = require("Email", input.email)?.trim().to_string();
        let subject = require("Subject", input.subject)?;
        let message = require("Message", input.message)?;

        if !EMAIL_REGEX.is_match(&email) {
            return Err(DomainError::validation("Invalid email format"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone: optional(input.phone),
            organization: optional(input.organization),
            subject,
            message,
            read: false,
            replied: false,
            created_at: now,
        })
    }

    pub fn apply_flags(&mut self, flags: ContactFlags) {
        if let Some(read) = flags.read {
            self.read = read;
        }
        if let Some(replied) = flags.replied {
            self.replied = replied;
        }
    }
}
