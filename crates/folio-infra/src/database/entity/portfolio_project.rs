use sea_orm::Set;
use sea_orm::entity::prelude::*;

use folio_core::domain::PortfolioProject;

use crate::database::json::{decode_list, encode_list};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub link: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub impact: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,
    pub featured: bool,
    pub published: bool,
    pub sort_order: i32,
    pub author_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Author,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PortfolioProject {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            description: model.description,
            category: model.category,
            tags: decode_list("portfolio_projects.tags", model.tags),
            icon: model.icon,
            color: model.color,
            link: model.link,
            impact: model.impact,
            images: decode_list("portfolio_projects.images", model.images),
            featured: model.featured,
            published: model.published,
            sort_order: model.sort_order,
            author_id: model.author_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<PortfolioProject> for ActiveModel {
    fn from(project: PortfolioProject) -> Self {
        Self {
            id: Set(project.id),
            title: Set(project.title),
            slug: Set(project.slug),
            description: Set(project.description),
            category: Set(project.category),
            tags: Set(encode_list(&project.tags)),
            icon: Set(project.icon),
            color: Set(project.color),
            link: Set(project.link),
            impact: Set(project.impact),
            images: Set(encode_list(&project.images)),
            featured: Set(project.featured),
            published: Set(project.published),
            sort_order: Set(project.sort_order),
            author_id: Set(project.author_id),
            created_at: Set(project.created_at.into()),
            updated_at: Set(project.updated_at.into()),
        }
    }
}
