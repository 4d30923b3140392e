use sea_orm::Set;
use sea_orm::entity::prelude::*;

use folio_core::domain::ContactMessage;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub read: bool,
    pub replied: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ContactMessage {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            organization: model.organization,
            subject: model.subject,
            message: model.message,
            read: model.read,
            replied: model.replied,
            created_at: model.created_at.into(),
        }
    }
}

impl From<ContactMessage> for ActiveModel {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: Set(message.id),
            name: Set(message.name),
            email: Set(message.email),
            phone: Set(message.phone),
            organization: Set(message.organization),
            subject: Set(message.subject),
            message: Set(message.message),
            read: Set(message.read),
            replied: Set(message.replied),
            created_at: Set(message.created_at.into()),
        }
    }
}
