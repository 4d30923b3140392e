use sea_orm::Set;
use sea_orm::entity::prelude::*;

use folio_core::domain::{Talk, TalkStatus};

use crate::database::json::{decode_list, encode_list};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "talks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub talk_type: String,
    pub venue: Option<String>,
    pub location: Option<String>,
    pub date: DateTimeWithTimeZone,
    pub end_date: Option<DateTimeWithTimeZone>,
    pub audience: Option<String>,
    pub participants: Option<i32>,
    pub status: String,
    pub slides: Option<String>,
    pub recording: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,
    pub published: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Talk {
    fn from(model: Model) -> Self {
        let status = TalkStatus::parse(&model.status).unwrap_or_else(|| {
            tracing::warn!(talk_id = %model.id, status = %model.status, "Unknown talk status");
            TalkStatus::default()
        });

        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            talk_type: model.talk_type,
            venue: model.venue,
            location: model.location,
            date: model.date.into(),
            end_date: model.end_date.map(Into::into),
            audience: model.audience,
            participants: model.participants,
            status,
            slides: model.slides,
            recording: model.recording,
            images: decode_list("talks.images", model.images),
            published: model.published,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<Talk> for ActiveModel {
    fn from(talk: Talk) -> Self {
        Self {
            id: Set(talk.id),
            title: Set(talk.title),
            description: Set(talk.description),
            talk_type: Set(talk.talk_type),
            venue: Set(talk.venue),
            location: Set(talk.location),
            date: Set(talk.date.into()),
            end_date: Set(talk.end_date.map(Into::into)),
            audience: Set(talk.audience),
            participants: Set(talk.participants),
            status: Set(talk.status.as_str().to_string()),
            slides: Set(talk.slides),
            recording: Set(talk.recording),
            images: Set(encode_list(&talk.images)),
            published: Set(talk.published),
            created_at: Set(talk.created_at.into()),
            updated_at: Set(talk.updated_at.into()),
        }
    }
}
