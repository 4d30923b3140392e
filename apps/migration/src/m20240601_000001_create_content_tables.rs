use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn uuid_pk<T: Iden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col).uuid().not_null().primary_key().to_owned()
}

fn timestamp<T: Iden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

fn json_list<T: Iden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .json_binary()
        .not_null()
        .default(Expr::cust("'[]'::jsonb"))
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(uuid_pk(Users::Id))
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Name).string())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null().default("admin"))
                    .col(timestamp(Users::CreatedAt))
                    .col(timestamp(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(uuid_pk(Categories::Id))
                    .col(ColumnDef::new(Categories::Name).string().not_null())
                    .col(ColumnDef::new(Categories::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(Categories::Description).text())
                    .col(timestamp(Categories::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(uuid_pk(Tags::Id))
                    .col(ColumnDef::new(Tags::Name).string().not_null())
                    .col(ColumnDef::new(Tags::Slug).string().not_null().unique_key())
                    .col(timestamp(Tags::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(uuid_pk(BlogPosts::Id))
                    .col(ColumnDef::new(BlogPosts::Title).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(BlogPosts::Excerpt).text())
                    .col(ColumnDef::new(BlogPosts::Content).text().not_null())
                    .col(ColumnDef::new(BlogPosts::CoverImage).string())
                    .col(ColumnDef::new(BlogPosts::Published).boolean().not_null().default(false))
                    .col(ColumnDef::new(BlogPosts::PublishedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(BlogPosts::Views).big_integer().not_null().default(0))
                    .col(ColumnDef::new(BlogPosts::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(BlogPosts::CategoryId).uuid())
                    .col(timestamp(BlogPosts::CreatedAt))
                    .col(timestamp(BlogPosts::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_posts_author")
                            .from(BlogPosts::Table, BlogPosts::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_posts_category")
                            .from(BlogPosts::Table, BlogPosts::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlogPostTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BlogPostTags::PostId).uuid().not_null())
                    .col(ColumnDef::new(BlogPostTags::TagId).uuid().not_null())
                    .col(ColumnDef::new(BlogPostTags::Position).integer().not_null().default(0))
                    .primary_key(
                        Index::create()
                            .col(BlogPostTags::PostId)
                            .col(BlogPostTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_post_tags_post")
                            .from(BlogPostTags::Table, BlogPostTags::PostId)
                            .to(BlogPosts::Table, BlogPosts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_post_tags_tag")
                            .from(BlogPostTags::Table, BlogPostTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PortfolioProjects::Table)
                    .if_not_exists()
                    .col(uuid_pk(PortfolioProjects::Id))
                    .col(ColumnDef::new(PortfolioProjects::Title).string().not_null())
                    .col(
                        ColumnDef::new(PortfolioProjects::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PortfolioProjects::Description).text().not_null())
                    .col(ColumnDef::new(PortfolioProjects::Category).string().not_null())
                    .col(json_list(PortfolioProjects::Tags))
                    .col(ColumnDef::new(PortfolioProjects::Icon).string())
                    .col(ColumnDef::new(PortfolioProjects::Color).string())
                    .col(ColumnDef::new(PortfolioProjects::Link).string())
                    .col(ColumnDef::new(PortfolioProjects::Impact).text())
                    .col(json_list(PortfolioProjects::Images))
                    .col(
                        ColumnDef::new(PortfolioProjects::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::Published)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(PortfolioProjects::AuthorId).uuid().not_null())
                    .col(timestamp(PortfolioProjects::CreatedAt))
                    .col(timestamp(PortfolioProjects::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_projects_author")
                            .from(PortfolioProjects::Table, PortfolioProjects::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Talks::Table)
                    .if_not_exists()
                    .col(uuid_pk(Talks::Id))
                    .col(ColumnDef::new(Talks::Title).string().not_null())
                    .col(ColumnDef::new(Talks::Description).text().not_null())
                    .col(ColumnDef::new(Talks::TalkType).string().not_null())
                    .col(ColumnDef::new(Talks::Venue).string())
                    .col(ColumnDef::new(Talks::Location).string())
                    .col(ColumnDef::new(Talks::Date).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Talks::EndDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Talks::Audience).string())
                    .col(ColumnDef::new(Talks::Participants).integer())
                    .col(ColumnDef::new(Talks::Status).string().not_null().default("upcoming"))
                    .col(ColumnDef::new(Talks::Slides).string())
                    .col(ColumnDef::new(Talks::Recording).string())
                    .col(json_list(Talks::Images))
                    .col(ColumnDef::new(Talks::Published).boolean().not_null().default(false))
                    .col(timestamp(Talks::CreatedAt))
                    .col(timestamp(Talks::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ContactMessages::Table)
                    .if_not_exists()
                    .col(uuid_pk(ContactMessages::Id))
                    .col(ColumnDef::new(ContactMessages::Name).string().not_null())
                    .col(ColumnDef::new(ContactMessages::Email).string().not_null())
                    .col(ColumnDef::new(ContactMessages::Phone).string())
                    .col(ColumnDef::new(ContactMessages::Organization).string())
                    .col(ColumnDef::new(ContactMessages::Subject).string().not_null())
                    .col(ColumnDef::new(ContactMessages::Message).text().not_null())
                    .col(ColumnDef::new(ContactMessages::Read).boolean().not_null().default(false))
                    .col(
                        ColumnDef::new(ContactMessages::Replied)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(timestamp(ContactMessages::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HomePages::Table)
                    .if_not_exists()
                    .col(uuid_pk(HomePages::Id))
                    .col(ColumnDef::new(HomePages::HeroTitle).string().not_null())
                    .col(ColumnDef::new(HomePages::HeroJobTitle).string().not_null())
                    .col(ColumnDef::new(HomePages::HeroDescription).text().not_null())
                    .col(ColumnDef::new(HomePages::HeroImage).string())
                    .col(json_list(HomePages::Stats))
                    .col(json_list(HomePages::Achievements))
                    .col(json_list(HomePages::Skills))
                    .col(ColumnDef::new(HomePages::CtaTitle).string().not_null())
                    .col(ColumnDef::new(HomePages::CtaDescription).text().not_null())
                    .col(ColumnDef::new(HomePages::Published).boolean().not_null().default(true))
                    .col(timestamp(HomePages::CreatedAt))
                    .col(timestamp(HomePages::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AboutPages::Table)
                    .if_not_exists()
                    .col(uuid_pk(AboutPages::Id))
                    .col(ColumnDef::new(AboutPages::ProfileTitle).string().not_null())
                    .col(ColumnDef::new(AboutPages::ProfileSubtitle).string().not_null())
                    .col(ColumnDef::new(AboutPages::ProfileJobTitle).string().not_null())
                    .col(ColumnDef::new(AboutPages::ProfileLocation).string().not_null())
                    .col(
                        ColumnDef::new(AboutPages::ProfileYearsExperience)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AboutPages::ProfileSummary).text().not_null())
                    .col(ColumnDef::new(AboutPages::ProfileImage).string())
                    .col(json_list(AboutPages::Qualifications))
                    .col(json_list(AboutPages::ExpertiseAreas))
                    .col(json_list(AboutPages::Experiences))
                    .col(json_list(AboutPages::Achievements))
                    .col(ColumnDef::new(AboutPages::Published).boolean().not_null().default(true))
                    .col(timestamp(AboutPages::CreatedAt))
                    .col(timestamp(AboutPages::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ContactPages::Table)
                    .if_not_exists()
                    .col(uuid_pk(ContactPages::Id))
                    .col(ColumnDef::new(ContactPages::PageTitle).string().not_null())
                    .col(ColumnDef::new(ContactPages::PageDescription).text().not_null())
                    .col(ColumnDef::new(ContactPages::LocationTitle).string().not_null())
                    .col(ColumnDef::new(ContactPages::LocationAddress).string().not_null())
                    .col(ColumnDef::new(ContactPages::OperatingHours).string().not_null())
                    .col(json_list(ContactPages::SocialMedia))
                    .col(json_list(ContactPages::QuickActions))
                    .col(ColumnDef::new(ContactPages::ResponseTime).string().not_null())
                    .col(ColumnDef::new(ContactPages::ResponseTimeDesc).string().not_null())
                    .col(json_list(ContactPages::Faqs))
                    .col(
                        ColumnDef::new(ContactPages::Published)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(timestamp(ContactPages::CreatedAt))
                    .col(timestamp(ContactPages::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            ContactPages::Table.into_iden(),
            AboutPages::Table.into_iden(),
            HomePages::Table.into_iden(),
            ContactMessages::Table.into_iden(),
            Talks::Table.into_iden(),
            PortfolioProjects::Table.into_iden(),
            BlogPostTags::Table.into_iden(),
            BlogPosts::Table.into_iden(),
            Tags::Table.into_iden(),
            Categories::Table.into_iden(),
            Users::Table.into_iden(),
        ] {
            manager
                .drop_table(Table::drop().table(table).if_exists().to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Users {
    Table,
    Id,
    Email,
    Name,
    PasswordHash,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    Name,
    Slug,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    Name,
    Slug,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum BlogPosts {
    Table,
    Id,
    Title,
    Slug,
    Excerpt,
    Content,
    CoverImage,
    Published,
    PublishedAt,
    Views,
    AuthorId,
    CategoryId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum BlogPostTags {
    Table,
    PostId,
    TagId,
    Position,
}

#[derive(DeriveIden)]
pub(crate) enum PortfolioProjects {
    Table,
    Id,
    Title,
    Slug,
    Description,
    Category,
    Tags,
    Icon,
    Color,
    Link,
    Impact,
    Images,
    Featured,
    Published,
    SortOrder,
    AuthorId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Talks {
    Table,
    Id,
    Title,
    Description,
    TalkType,
    Venue,
    Location,
    Date,
    EndDate,
    Audience,
    Participants,
    Status,
    Slides,
    Recording,
    Images,
    Published,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum ContactMessages {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Organization,
    Subject,
    Message,
    Read,
    Replied,
    CreatedAt,
}

#[derive(DeriveIden)]
enum HomePages {
    Table,
    Id,
    HeroTitle,
    HeroJobTitle,
    HeroDescription,
    HeroImage,
    Stats,
    Achievements,
    Skills,
    CtaTitle,
    CtaDescription,
    Published,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AboutPages {
    Table,
    Id,
    ProfileTitle,
    ProfileSubtitle,
    ProfileJobTitle,
    ProfileLocation,
    ProfileYearsExperience,
    ProfileSummary,
    ProfileImage,
    Qualifications,
    ExpertiseAreas,
    Experiences,
    Achievements,
    Published,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ContactPages {
    Table,
    Id,
    PageTitle,
    PageDescription,
    LocationTitle,
    LocationAddress,
    OperatingHours,
    SocialMedia,
    QuickActions,
    ResponseTime,
    ResponseTimeDesc,
    Faqs,
    Published,
    CreatedAt,
    UpdatedAt,
}
