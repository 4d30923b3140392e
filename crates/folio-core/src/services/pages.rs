//! The three singleton pages: home, about and contact.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{
    AboutPage, AboutPageInput, ContactPage, ContactPageInput, HomePage, HomePageInput,
};
use crate::error::DomainError;
use crate::ports::SingletonRepository;

pub struct PageService {
    home: Arc<dyn SingletonRepository<HomePage>>,
    about: Arc<dyn SingletonRepository<AboutPage>>,
    contact: Arc<dyn SingletonRepository<ContactPage>>,
}

fn visible<T>(
    page: Option<T>,
    include_drafts: bool,
    published: impl Fn(&T) -> bool,
    entity: &'static str,
) -> Result<T, DomainError> {
    page.filter(|p| include_drafts || published(p))
        .ok_or_else(|| DomainError::not_found(entity, "singleton"))
}

impl PageService {
    pub fn new(
        home: Arc<dyn SingletonRepository<HomePage>>,
        about: Arc<dyn SingletonRepository<AboutPage>>,
        contact: Arc<dyn SingletonRepository<ContactPage>>,
    ) -> Self {
        Self {
            home,
            about,
            contact,
        }
    }

    pub async fn home(&self, include_drafts: bool) -> Result<HomePage, DomainError> {
        let page = self.home.find_first().await?;
        visible(page, include_drafts, |p| p.published, "Home page")
    }

    /// The home row is created by seeding; an edit never creates it.
    pub async fn update_home(&self, input: HomePageInput) -> Result<HomePage, DomainError> {
        let mut page = self
            .home
            .find_first()
            .await?
            .ok_or_else(|| DomainError::not_found("Home page", "singleton"))?;
        page.apply(input, Utc::now())?;
        let saved = self.home.save(page).await?;
        tracing::info!(page_id = %saved.id, "Home page updated");
        Ok(saved)
    }

    pub async fn about(&self, include_drafts: bool) -> Result<AboutPage, DomainError> {
        let page = self.about.find_first().await?;
        visible(page, include_drafts, |p| p.published, "About page")
    }

    pub async fn update_about(&self, input: AboutPageInput) -> Result<AboutPage, DomainError> {
        let mut page = self
            .about
            .find_first()
            .await?
            .ok_or_else(|| DomainError::not_found("About page", "singleton"))?;
        page.apply(input, Utc::now())?;
        let saved = self.about.save(page).await?;
        tracing::info!(page_id = %saved.id, "About page updated");
        Ok(saved)
    }

    pub async fn contact_page(&self, include_drafts: bool) -> Result<ContactPage, DomainError> {
        let page = self.contact.find_first().await?;
        visible(page, include_drafts, |p| p.published, "Contact page")
    }

    /// Update the contact page, creating it when no row exists yet.
    pub async fn upsert_contact_page(
        &self,
        input: ContactPageInput,
    ) -> Result<ContactPage, DomainError> {
        let now = Utc::now();
        let page = match self.contact.find_first().await? {
            Some(mut page) => {
                page.apply(input, now)?;
                page
            }
            None => ContactPage::create(input, now)?,
        };
        let saved = self.contact.save(page).await?;
        tracing::info!(page_id = %saved.id, "Contact page saved");
        Ok(saved)
    }

    /// Insert placeholder rows for any page that is still missing.
    pub async fn seed_missing(&self) -> Result<(), DomainError> {
        let now = Utc::now();
        if self.home.find_first().await?.is_none() {
            self.home.save(HomePage::starter(now)).await?;
        }
        if self.about.find_first().await?.is_none() {
            self.about.save(AboutPage::starter(now)).await?;
        }
        if self.contact.find_first().await?.is_none() {
            self.contact.save(ContactPage::starter(now)).await?;
        }
        Ok(())
    }
}
