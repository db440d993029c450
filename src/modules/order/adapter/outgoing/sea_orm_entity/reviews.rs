use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub order_id: Uuid,

    pub customer_id: Uuid,

    pub vendor_id: Uuid,

    pub driver_id: Option<Uuid>,

    pub vendor_rating: i32,

    pub driver_rating: Option<i32>,

    pub comment: Option<String>,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::orders::Entity",
        from = "Column::OrderId",
        to = "super::orders::Column::Id"
    )]
    Order,

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
}

impl ActiveModelBehavior for ActiveModel {}
