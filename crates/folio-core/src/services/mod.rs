//! Services - the editing rules, written against ports only.

mod accounts;
mod blog;
mod contacts;
mod media;
mod pages;
mod portfolio;
mod stats;
mod talks;
mod taxonomy;

pub use accounts::{AccountService, MIN_PASSWORD_LENGTH, Session};
pub use blog::{AuthorSummary, BlogPostDetails, BlogService};
pub use contacts::ContactService;
pub use media::{MAX_UPLOAD_BYTES, MediaService, UploadedImage, sniff_image};
pub use pages::PageService;
pub use portfolio::PortfolioService;
pub use stats::{DashboardStats, StatsService};
pub use talks::TalkService;
pub use taxonomy::TaxonomyService;
