use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::payment::application::domain::entities::{PaymentMethod, PaymentStatus};
use crate::payment::application::ports::outgoing::PaymentRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub order_id: Uuid,

    pub method: String,

    pub status: String,

    pub tx_ref: Option<String>,

    pub paid_at: Option<DateTimeWithTimeZone>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// Returns None when the stored method or status string is not a
    /// known value.
    pub fn to_record(&self) -> Option<PaymentRecord> {
        let method = PaymentMethod::parse(&self.method)?;
        let status = PaymentStatus::parse(&self.status)?;

        Some(PaymentRecord {
            id: self.id,
            order_id: self.order_id,
            method,
            status,
            tx_ref: self.tx_ref.clone(),
            paid_at: self.paid_at.map(Into::into),
            created_at: self.created_at.into(),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::order::adapter::outgoing::sea_orm_entity::orders::Entity",
        from = "Column::OrderId",
        to = "crate::modules::order::adapter::outgoing::sea_orm_entity::orders::Column::Id"
    )]
    Order,
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            use sea_orm::ActiveValue::Set;
            self.updated_at = Set(chrono::Utc::now().into());
        }

        Ok(self)
    }
}
