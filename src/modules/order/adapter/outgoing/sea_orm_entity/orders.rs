use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::order::application::domain::OrderStatus;
use crate::order::application::ports::outgoing::OrderRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub customer_id: Uuid,

    pub vendor_id: Uuid,

    pub driver_id: Option<Uuid>,

    pub status: String,

    pub delivery_address: String,

    pub total_amount: Decimal,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// Returns None when the stored status string is not a known value.
    pub fn to_record(&self) -> Option<OrderRecord> {
        let status = OrderStatus::parse(&self.status)?;

        Some(OrderRecord {
            id: self.id,
            customer_id: self.customer_id,
            vendor_id: self.vendor_id,
            driver_id: self.driver_id,
            status,
            delivery_address: self.delivery_address.clone(),
            total_amount: self.total_amount,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::CustomerId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    Customer,

    #[sea_orm(
        belongs_to = "crate::modules::vendor::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::VendorId",
        to = "crate::modules::vendor::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Vendor,

    #[sea_orm(
        belongs_to = "crate::modules::driver::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::DriverId",
        to = "crate::modules::driver::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Driver,

    #[sea_orm(has_many = "super::order_items::Entity")]
    Items,
}

impl Related<super::order_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
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
