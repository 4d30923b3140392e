//! SeaORM entities, one module per table.

pub mod about_page;
pub mod blog_post;
pub mod blog_post_tag;
pub mod category;
pub mod contact_message;
pub mod contact_page;
pub mod home_page;
pub mod portfolio_project;
pub mod tag;
pub mod talk;
pub mod user;
