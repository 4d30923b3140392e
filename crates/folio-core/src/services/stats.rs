use std::sync::Arc;

use serde::Serialize;

use crate::error::DomainError;
use crate::ports::{BlogPostRepository, ContactRepository, PortfolioRepository, TalkRepository};

/// Counters shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_posts: u64,
    pub published_posts: u64,
    pub total_projects: u64,
    pub total_talks: u64,
    pub total_contacts: u64,
    pub unread_contacts: u64,
}

pub struct StatsService {
    posts: Arc<dyn BlogPostRepository>,
    projects: Arc<dyn PortfolioRepository>,
    talks: Arc<dyn TalkRepository>,
    messages: Arc<dyn ContactRepository>,
}

impl StatsService {
    pub fn new(
        posts: Arc<dyn BlogPostRepository>,
        projects: Arc<dyn PortfolioRepository>,
        talks: Arc<dyn TalkRepository>,
        messages: Arc<dyn ContactRepository>,
    ) -> Self {
        Self {
            posts,
            projects,
            talks,
            messages,
        }
    }

    pub async fn dashboard(&self) -> Result<DashboardStats, DomainError> {
        let (total_posts, published_posts, total_projects, total_talks, total_contacts, unread) =
            futures::join!(
                self.posts.count(false),
                self.posts.count(true),
                self.projects.count(),
                self.talks.count(),
                self.messages.count(false),
                self.messages.count(true),
            );

        Ok(DashboardStats {
            total_posts: total_posts?,
            published_posts: published_posts?,
            total_projects: total_projects?,
            total_talks: total_talks?,
            total_contacts: total_contacts?,
            unread_contacts: unread?,
        })
    }
}
