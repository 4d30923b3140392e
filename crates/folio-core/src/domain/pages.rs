//! Singleton content pages: home, about and contact.
//!
//! Each page is a single row whose list-valued sections (stats, FAQs, ...)
//! are small structs kept in declaration order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fields::{merge_optional, merge_required, optional, require};
use crate::error::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub icon: String,
    pub title: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Qualification {
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertiseArea {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementGroup {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub name: String,
    pub url: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    pub title: String,
    pub link: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub id: Uuid,
    pub hero_title: String,
    pub hero_job_title: String,
    pub hero_description: String,
    pub hero_image: Option<String>,
    pub stats: Vec<Stat>,
    pub achievements: Vec<Milestone>,
    pub skills: Vec<Skill>,
    pub cta_title: String,
    pub cta_description: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePageInput {
    pub hero_title: Option<String>,
    pub hero_job_title: Option<String>,
    pub hero_description: Option<String>,
    pub hero_image: Option<String>,
    pub stats: Option<Vec<Stat>>,
    pub achievements: Option<Vec<Milestone>>,
    pub skills: Option<Vec<Skill>>,
    pub cta_title: Option<String>,
    pub cta_description: Option<String>,
    pub published: Option<bool>,
}

impl HomePage {
    pub fn create(input: HomePageInput, now: DateTime<Utc>) -> Result<Self, DomainError> {
        Ok(Self {
            id: Uuid::new_v4(),
            hero_title: require("Hero title", input.hero_title)?,
            hero_job_title: require("Hero job title", input.hero_job_title)?,
            hero_description: require("Hero description", input.hero_description)?,
            hero_image: optional(input.hero_image),
            stats: input.stats.unwrap_or_default(),
            achievements: input.achievements.unwrap_or_default(),
            skills: input.skills.unwrap_or_default(),
            cta_title: require("CTA title", input.cta_title)?,
            cta_description: require("CTA description", input.cta_description)?,
            published: input.published.unwrap_or(true),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply(&mut self, input: HomePageInput, now: DateTime<Utc>) -> Result<(), DomainError> {
        merge_required(&mut self.hero_title, "Hero title", input.hero_title)?;
        merge_required(&mut self.hero_job_title, "Hero job title", input.hero_job_title)?;
        merge_required(
            &mut self.hero_description,
            "Hero description",
            input.hero_description,
        )?;
        merge_required(&mut self.cta_title, "CTA title", input.cta_title)?;
        merge_required(
            &mut self.cta_description,
            "CTA description",
            input.cta_description,
        )?;
        merge_optional(&mut self.hero_image, input.hero_image);
        if let Some(stats) = input.stats {
            self.stats = stats;
        }
        if let Some(achievements) = input.achievements {
            self.achievements = achievements;
        }
        if let Some(skills) = input.skills {
            self.skills = skills;
        }
        if let Some(published) = input.published {
            self.published = published;
        }
        self.updated_at = now;
        Ok(())
    }

    /// Placeholder content for a fresh installation.
    pub fn starter(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            hero_title: "Hello, I'm Your Name".into(),
            hero_job_title: "Educator & Technologist".into(),
            hero_description: "Edit this introduction from the admin dashboard.".into(),
            hero_image: None,
            stats: vec![Stat {
                value: "10+".into(),
                label: "Years of experience".into(),
            }],
            achievements: Vec::new(),
            skills: Vec::new(),
            cta_title: "Let's work together".into(),
            cta_description: "Get in touch about talks, workshops and projects.".into(),
            published: true,
            created_at: now,
            updated_at: now,
        }
    }
}

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPage {
    pub id: Uuid,
    pub profile_title: String,
    pub profile_subtitle: String,
    pub profile_job_title: String,
    pub profile_location: String,
    pub profile_years_experience: String,
    pub profile_summary: String,
    pub profile_image: Option<String>,
    pub qualifications: Vec<Qualification>,
    pub expertise_areas: Vec<ExpertiseArea>,
    pub experiences: Vec<Experience>,
    pub achievements: Vec<AchievementGroup>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPageInput {
    pub profile_title: Option<String>,
    pub profile_subtitle: Option<String>,
    pub profile_job_title: Option<String>,
    pub profile_location: Option<String>,
    pub profile_years_experience: Option<String>,
    pub profile_summary: Option<String>,
    pub profile_image: Option<String>,
    pub qualifications: Option<Vec<Qualification>>,
    pub expertise_areas: Option<Vec<ExpertiseArea>>,
    pub experiences: Option<Vec<Experience>>,
    pub achievements: Option<Vec<AchievementGroup>>,
    pub published: Option<bool>,
}

impl AboutPage {
    pub fn create(input: AboutPageInput, now: DateTime<Utc>) -> Result<Self, DomainError> {
        Ok(Self {
            id: Uuid::new_v4(),
            profile_title: require("Profile title", input.profile_title)?,
            profile_subtitle: require("Profile subtitle", input.profile_subtitle)?,
            profile_job_title: require("Profile job title", input.profile_job_title)?,
            profile_location: require("Profile location", input.profile_location)?,
            profile_years_experience: require(
                "Years of experience",
                input.profile_years_experience,
            )?,
            profile_summary: require("Profile summary", input.profile_summary)?,
            profile_image: optional(input.profile_image),
            qualifications: input.qualifications.unwrap_or_default(),
            expertise_areas: input.expertise_areas.unwrap_or_default(),
            experiences: input.experiences.unwrap_or_default(),
            achievements: input.achievements.unwrap_or_default(),
            published: input.published.unwrap_or(true),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply(&mut self, input: AboutPageInput, now: DateTime<Utc>) -> Result<(), DomainError> {
        merge_required(&mut self.profile_title, "Profile title", input.profile_title)?;
        merge_required(
            &mut self.profile_subtitle,
            "Profile subtitle",
            input.profile_subtitle,
        )?;
        merge_required(
            &mut self.profile_job_title,
            "Profile job title",
            input.profile_job_title,
        )?;
        merge_required(
            &mut self.profile_location,
            "Profile location",
            input.profile_location,
        )?;
        merge_required(
            &mut self.profile_years_experience,
            "Years of experience",
            input.profile_years_experience,
        )?;
        merge_required(
            &mut self.profile_summary,
            "Profile summary",
            input.profile_summary,
        )?;
        merge_optional(&mut self.profile_image, input.profile_image);
        if let Some(qualifications) = input.qualifications {
            self.qualifications = qualifications;
        }
        if let Some(expertise_areas) = input.expertise_areas {
            self.expertise_areas = expertise_areas;
        }
        if let Some(experiences) = input.experiences {
            self.experiences = experiences;
        }
        if let Some(achievements) = input.achievements {
            self.achievements = achievements;
        }
        if let Some(published) = input.published {
            self.published = published;
        }
        self.updated_at = now;
        Ok(())
    }

    pub fn starter(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            profile_title: "About Me".into(),
            profile_subtitle: "Educator, trainer and technologist".into(),
            profile_job_title: "Educator & Technologist".into(),
            profile_location: "Kuala Lumpur, Malaysia".into(),
            profile_years_experience: "10+".into(),
            profile_summary: "Edit this summary from the admin dashboard.".into(),
            profile_image: None,
            qualifications: Vec::new(),
            expertise_areas: Vec::new(),
            experiences: Vec::new(),
            achievements: Vec::new(),
            published: true,
            created_at: now,
            updated_at: now,
        }
    }
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPage {
    pub id: Uuid,
    pub page_title: String,
    pub page_description: String,
    pub location_title: String,
    pub location_address: String,
    pub operating_hours: String,
    pub social_media: Vec<SocialLink>,
    pub quick_actions: Vec<QuickAction>,
    pub response_time: String,
    pub response_time_desc: String,
    pub faqs: Vec<Faq>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPageInput {
    pub page_title: Option<String>,
    pub page_description: Option<String>,
    pub location_title: Option<String>,
    pub location_address: Option<String>,
    pub operating_hours: Option<String>,
    pub social_media: Option<Vec<SocialLink>>,
    pub quick_actions: Option<Vec<QuickAction>>,
    pub response_time: Option<String>,
    pub response_time_desc: Option<String>,
    pub faqs: Option<Vec<Faq>>,
    pub published: Option<bool>,
}

impl ContactPage {
    pub fn create(input: ContactPageInput, now: DateTime<Utc>) -> Result<Self, DomainError> {
        Ok(Self {
            id: Uuid::new_v4(),
            page_title: require("Page title", input.page_title)?,
            page_description: input.page_description.unwrap_or_default(),
            location_title: input.location_title.unwrap_or_default(),
            location_address: input.location_address.unwrap_or_default(),
            operating_hours: input.operating_hours.unwrap_or_default(),
            social_media: input.social_media.unwrap_or_default(),
            quick_actions: input.quick_actions.unwrap_or_default(),
            response_time: input.response_time.unwrap_or_default(),
            response_time_desc: input.response_time_desc.unwrap_or_default(),
            faqs: input.faqs.unwrap_or_default(),
            published: input.published.unwrap_or(true),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply(
        &mut self,
        input: ContactPageInput,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        merge_required(&mut self.page_title, "Page title", input.page_title)?;
        let texts = [
            (&mut self.page_description, input.page_description),
            (&mut self.location_title, input.location_title),
            (&mut self.location_address, input.location_address),
            (&mut self.operating_hours, input.operating_hours),
            (&mut self.response_time, input.response_time),
            (&mut self.response_time_desc, input.response_time_desc),
        ];
        for (target, value) in texts {
            if let Some(value) = value {
                *target = value;
            }
        }
        if let Some(social_media) = input.social_media {
            self.social_media = social_media;
        }
        if let Some(quick_actions) = input.quick_actions {
            self.quick_actions = quick_actions;
        }
        if let Some(faqs) = input.faqs {
            self.faqs = faqs;
        }
        if let Some(published) = input.published {
            self.published = published;
        }
        self.updated_at = now;
        Ok(())
    }

    pub fn starter(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            page_title: "Get in Touch".into(),
            page_description: "Questions about talks, workshops or collaborations are welcome."
                .into(),
            location_title: "Location".into(),
            location_address: "Kuala Lumpur, Malaysia".into(),
            operating_hours: "Mon - Fri, 9am - 5pm".into(),
            social_media: Vec::new(),
            quick_actions: Vec::new(),
            response_time: "24 hours".into(),
            response_time_desc: "I usually reply within a working day.".into(),
            faqs: Vec::new(),
            published: true,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_apply_keeps_list_order() {
        let now = Utc::now();
        let mut home = HomePage::starter(now);
        let stats = vec![
            Stat {
                value: "500+".into(),
                label: "Teachers trained".into(),
            },
            Stat {
                value: "50+".into(),
                label: "Workshops".into(),
            },
            Stat {
                value: "3".into(),
                label: "Awards".into(),
            },
        ];
        home.apply(
            HomePageInput {
                stats: Some(stats.clone()),
                ..Default::default()
            },
            now,
        )
        .unwrap();
        assert_eq!(home.stats, stats);
        assert_eq!(home.hero_title, "Hello, I'm Your Name");
    }

    #[test]
    fn home_rejects_blank_required_field() {
        let now = Utc::now();
        let mut home = HomePage::starter(now);
        let err = home
            .apply(
                HomePageInput {
                    cta_title: Some(" ".into()),
                    ..Default::default()
                },
                now,
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(home.cta_title, "Let's work together");
    }

    #[test]
    fn about_achievements_nested_items_deserialize() {
        let input: AboutPageInput = serde_json::from_str(
            r#"{"achievements":[{"title":"Awards","items":["Best Teacher 2020","Innovation 2022"]}]}"#,
        )
        .unwrap();
        let groups = input.achievements.unwrap();
        assert_eq!(groups[0].items, vec!["Best Teacher 2020", "Innovation 2022"]);
    }

    #[test]
    fn contact_page_create_needs_only_title() {
        let page = ContactPage::create(
            ContactPageInput {
                page_title: Some("Contact".into()),
                faqs: Some(vec![Faq {
                    question: "Do you travel?".into(),
                    answer: "Yes".into(),
                }]),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap();
        assert!(page.published);
        assert_eq!(page.faqs.len(), 1);
        assert_eq!(page.location_title, "");
    }
}
