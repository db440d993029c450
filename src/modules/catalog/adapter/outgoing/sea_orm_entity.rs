use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::catalog::application::domain::entities::FuelType;
use crate::catalog::application::ports::outgoing::Product;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub vendor_id: Uuid,

    pub name: String,

    pub fuel_type: String,

    pub unit_price: Decimal,

    pub stock_quantity: i32,

    pub min_order_qty: i32,

    pub max_order_qty: i32,

    pub active: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// Returns None when the stored fuel type is not a known value.
    pub fn to_product(&self) -> Option<Product> {
        let fuel_type = FuelType::parse(&self.fuel_type)?;

        Some(Product {
            id: self.id,
            vendor_id: self.vendor_id,
            name: self.name.clone(),
            fuel_type,
            unit_price: self.unit_price,
            stock_quantity: self.stock_quantity,
            min_order_qty: self.min_order_qty,
            max_order_qty: self.max_order_qty,
            active: self.active,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::vendor::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::VendorId",
        to = "crate::modules::vendor::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Vendor,
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
