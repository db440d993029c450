use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::notification::application::domain::entities::NotificationKind;
use crate::notification::application::ports::outgoing::NotificationResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub kind: String,

    pub title: String,

    pub body: String,

    pub order_id: Option<Uuid>,

    pub is_read: bool,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_result(&self) -> Option<NotificationResult> {
        Some(NotificationResult {
            id: self.id,
            user_id: self.user_id,
            kind: NotificationKind::parse(&self.kind)?,
            title: self.title.clone(),
            body: self.body.clone(),
            order_id: self.order_id,
            is_read: self.is_read,
            created_at: self.created_at.into(),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    User,
}

impl ActiveModelBehavior for ActiveModel {}
