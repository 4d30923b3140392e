use sea_orm_migration::prelude::*;

use crate::m20240601_000001_create_content_tables::{
    BlogPostTags, BlogPosts, ContactMessages, PortfolioProjects, Talks,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_blog_posts_published_created")
                    .table(BlogPosts::Table)
                    .col(BlogPosts::Published)
                    .col(BlogPosts::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blog_post_tags_tag")
                    .table(BlogPostTags::Table)
                    .col(BlogPostTags::TagId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_portfolio_projects_sort")
                    .table(PortfolioProjects::Table)
                    .col(PortfolioProjects::SortOrder)
                    .col(PortfolioProjects::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_talks_date")
                    .table(Talks::Table)
                    .col(Talks::Date)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contact_messages_read")
                    .table(ContactMessages::Table)
                    .col(ContactMessages::Read)
                    .col(ContactMessages::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table) in [
            ("idx_contact_messages_read", ContactMessages::Table.into_iden()),
            ("idx_talks_date", Talks::Table.into_iden()),
            ("idx_portfolio_projects_sort", PortfolioProjects::Table.into_iden()),
            ("idx_blog_post_tags_tag", BlogPostTags::Table.into_iden()),
            ("idx_blog_posts_published_created", BlogPosts::Table.into_iden()),
        ] {
            manager
                .drop_index(Index::drop().name(name).table(table).to_owned())
                .await?;
        }
        Ok(())
    }
}
