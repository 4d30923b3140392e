use sea_orm::Set;
use sea_orm::entity::prelude::*;

use folio_core::domain::HomePage;

use crate::database::json::{decode_list, encode_list};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "home_pages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub hero_title: String,
    pub hero_job_title: String,
    #[sea_orm(column_type = "Text")]
    pub hero_description: String,
    pub hero_image: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub stats: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub achievements: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,
    pub cta_title: String,
    #[sea_orm(column_type = "Text")]
    pub cta_description: String,
    pub published: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for HomePage {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            hero_title: model.hero_title,
            hero_job_title: model.hero_job_title,
            hero_description: model.hero_description,
            hero_image: model.hero_image,
            stats: decode_list("home_pages.stats", model.stats),
            achievements: decode_list("home_pages.achievements", model.achievements),
            skills: decode_list("home_pages.skills", model.skills),
            cta_title: model.cta_title,
            cta_description: model.cta_description,
            published: model.published,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<HomePage> for ActiveModel {
    fn from(page: HomePage) -> Self {
        Self {
            id: Set(page.id),
            hero_title: Set(page.hero_title),
            hero_job_title: Set(page.hero_job_title),
            hero_description: Set(page.hero_description),
            hero_image: Set(page.hero_image),
            stats: Set(encode_list(&page.stats)),
            achievements: Set(encode_list(&page.achievements)),
            skills: Set(encode_list(&page.skills)),
            cta_title: Set(page.cta_title),
            cta_description: Set(page.cta_description),
            published: Set(page.published),
            created_at: Set(page.created_at.into()),
            updated_at: Set(page.updated_at.into()),
        }
    }
}
