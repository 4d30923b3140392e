use sea_orm::Set;
use sea_orm::entity::prelude::*;

use folio_core::domain::AboutPage;

use crate::database::json::{decode_list, encode_list};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "about_pages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub profile_title: String,
    pub profile_subtitle: String,
    pub profile_job_title: String,
    pub profile_location: String,
    pub profile_years_experience: String,
    #[sea_orm(column_type = "Text")]
    pub profile_summary: String,
    pub profile_image: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub qualifications: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub expertise_areas: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub experiences: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub achievements: Json,
    pub published: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AboutPage {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            profile_title: model.profile_title,
            profile_subtitle: model.profile_subtitle,
            profile_job_title: model.profile_job_title,
            profile_location: model.profile_location,
            profile_years_experience: model.profile_years_experience,
            profile_summary: model.profile_summary,
            profile_image: model.profile_image,
            qualifications: decode_list("about_pages.qualifications", model.qualifications),
            expertise_areas: decode_list("about_pages.expertise_areas", model.expertise_areas),
            experiences: decode_list("about_pages.experiences", model.experiences),
            achievements: decode_list("about_pages.achievements", model.achievements),
            published: model.published,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<AboutPage> for ActiveModel {
    fn from(page: AboutPage) -> Self {
        Self {
            id: Set(page.id),
            profile_title: Set(page.profile_title),
            profile_subtitle: Set(page.profile_subtitle),
            profile_job_title: Set(page.profile_job_title),
            profile_location: Set(page.profile_location),
            profile_years_experience: Set(page.profile_years_experience),
            profile_summary: Set(page.profile_summary),
            profile_image: Set(page.profile_image),
            qualifications: Set(encode_list(&page.qualifications)),
            expertise_areas: Set(encode_list(&page.expertise_areas)),
            experiences: Set(encode_list(&page.experiences)),
            achievements: Set(encode_list(&page.achievements)),
            published: Set(page.published),
            created_at: Set(page.created_at.into()),
            updated_at: Set(page.updated_at.into()),
        }
    }
}
