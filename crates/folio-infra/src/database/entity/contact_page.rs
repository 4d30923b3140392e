use sea_orm::Set;
use sea_orm::entity::prelude::*;

use folio_core::domain::ContactPage;

use crate::database::json::{decode_list, encode_list};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_pages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub page_title: String,
    #[sea_orm(column_type = "Text")]
    pub page_description: String,
    pub location_title: String,
    pub location_address: String,
    pub operating_hours: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub social_media: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub quick_actions: Json,
    pub response_time: String,
    pub response_time_desc: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub faqs: Json,
    pub published: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ContactPage {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            page_title: model.page_title,
            page_description: model.page_description,
            location_title: model.location_title,
            location_address: model.location_address,
            operating_hours: model.operating_hours,
            social_media: decode_list("contact_pages.social_media", model.social_media),
            quick_actions: decode_list("contact_pages.quick_actions", model.quick_actions),
            response_time: model.response_time,
            response_time_desc: model.response_time_desc,
            faqs: decode_list("contact_pages.faqs", model.faqs),
            published: model.published,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<ContactPage> for ActiveModel {
    fn from(page: ContactPage) -> Self {
        Self {
            id: Set(page.id),
            page_title: Set(page.page_title),
            page_description: Set(page.page_description),
            location_title: Set(page.location_title),
            location_address: Set(page.location_address),
            operating_hours: Set(page.operating_hours),
            social_media: Set(encode_list(&page.social_media)),
            quick_actions: Set(encode_list(&page.quick_actions)),
            response_time: Set(page.response_time),
            response_time_desc: Set(page.response_time_desc),
            faqs: Set(encode_list(&page.faqs)),
            published: Set(page.published),
            created_at: Set(page.created_at.into()),
            updated_at: Set(page.updated_at.into()),
        }
    }
}
