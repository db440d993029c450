use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::driver::application::domain::entities::DriverAvailability;
use crate::driver::application::ports::outgoing::DriverProfile;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "drivers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub vendor_id: Option<Uuid>,

    pub vehicle_type: String,

    pub vehicle_plate: String,

    pub license_number: String,

    pub availability: String,

    pub rating_avg: Decimal,

    pub rating_count: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// Returns None when the stored availability string is not one of
    /// the known values.
    pub fn to_profile(&self) -> Option<DriverProfile> {
        let availability = DriverAvailability::parse(&self.availability)?;

        Some(DriverProfile {
            id: self.id,
            user_id: self.user_id,
            vendor_id: self.vendor_id,
            vehicle_type: self.vehicle_type.clone(),
            vehicle_plate: self.vehicle_plate.clone(),
            license_number: self.license_number.clone(),
            availability,
            rating_avg: self.rating_avg,
            rating_count: self.rating_count,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
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
