//! Domain entities - the content the site publishes and the admin edits.

mod blog;
mod contact;
mod fields;
mod pages;
mod portfolio;
mod talk;
mod user;

pub use blog::{BlogPost, BlogPostInput, Category, Tag, TaxonomyInput};
pub use contact::{ContactFlags, ContactInput, ContactMessage};
pub use fields::parse_datetime;
pub use pages::{
    AboutPage, AboutPageInput, AchievementGroup, ContactPage, ContactPageInput, Experience,
    ExpertiseArea, Faq, HomePage, HomePageInput, Milestone, Qualification, QuickAction, Skill,
    SocialLink, Stat,
};
pub use portfolio::{PortfolioProject, PortfolioProjectInput};
pub use talk::{Talk, TalkInput, TalkStatus};
pub use user::{Role, User, mask_email};
