use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fields::{merge_optional, merge_required, optional, parse_datetime, require};
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TalkStatus {
    #[default]
    Upcoming,
    Completed,
    Cancelled,
}

impl TalkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TalkStatus::Upcoming => "upcoming",
            TalkStatus::Completed => "completed",
            TalkStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "upcoming" => Some(TalkStatus::Upcoming),
            "completed" => Some(TalkStatus::Completed),
            "cancelled" => Some(TalkStatus::Cancelled),
            _ => None,
        }
    }
}

/// A talk, workshop, webinar or similar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Talk {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub talk_type: String,
    pub venue: Option<String>,
    pub location: Option<String>,
    pub date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub audience: Option<String>,
    pub participants: Option<i32>,
    pub status: TalkStatus,
    pub slides: Option<String>,
    pub recording: Option<String>,
    pub images: Vec<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Dates are accepted as RFC 3339 or `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkInput {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub talk_type: Option<String>,
    pub venue: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub end_date: Option<String>,
    pub audience: Option<String>,
    pub participants: Option<i32>,
    pub status: Option<TalkStatus>,
    pub slides: Option<String>,
    pub recording: Option<String>,
    pub images: Option<Vec<String>>,
    pub published: Option<bool>,
}

impl Talk {
    pub fn create(input: TalkInput, now: DateTime<Utc>) -> Result<Self, DomainError> {
        let title = require("Title", input.title)?;
        let description = require("Description", input.description)?;
        let talk_type = require("Type", input.talk_type)?;
        let date = parse_datetime("Date", &require("Date", input.date)?)?;
        let end_date = optional(input.end_date)
            .map(|raw| parse_datetime("End date", &raw))
            .transpose()?;

        let talk = Self {
            id: Uuid::new_v4(),
            title,
            description,
            talk_type,
            venue: optional(input.venue),
            location: optional(input.location),
            date,
            end_date,
            audience: optional(input.audience),
            participants: input.participants,
            status: input.status.unwrap_or_default(),
            slides: optional(input.slides),
            recording: optional(input.recording),
            images: input.images.unwrap_or_default(),
            published: input.published.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };
        talk.check_dates()?;
        Ok(talk)
    }

    pub fn apply(&mut self, input: TalkInput, now: DateTime<Utc>) -> Result<(), DomainError> {
        merge_required(&mut self.title, "Title", input.title)?;
        merge_required(&mut self.description, "Description", input.description)?;
        merge_required(&mut self.talk_type, "Type", input.talk_type)?;
        if let Some(raw) = input.date {
            self.date = parse_datetime("Date", &raw)?;
        }
        if let Some(raw) = input.end_date {
            self.end_date = optional(Some(raw))
                .map(|raw| parse_datetime("End date", &raw))
                .transpose()?;
        }
        merge_optional(&mut self.venue, input.venue);
        merge_optional(&mut self.location, input.location);
        merge_optional(&mut self.audience, input.audience);
        merge_optional(&mut self.slides, input.slides);
        merge_optional(&mut self.recording, input.recording);
        if let Some(participants) = input.participants {
            self.participants = Some(participants);
        }
        if let Some(status) = input.status {
            self.status = status;
        }
        if let Some(images) = input.images {
            self.images = images;
        }
        if let Some(published) = input.published {
            self.published = published;
        }
        self.check_dates()?;
        self.updated_at = now;
        Ok(())
    }

    fn check_dates(&self) -> Result<(), DomainError> {
        match self.end_date {
            Some(end) if end < self.date => Err(DomainError::validation(
                "End date must not be before the start date",
            )),
            _ => Ok(()),
        }
    }
}
