use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::driver::application::domain::entities::DriverAvailability;
use crate::driver::application::ports::outgoing::{
    DriverProfile, DriverRepository, DriverRepositoryError, UpdateDriverProfileData,
};
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;

use super::sea_orm_entity::{ActiveModel, Column, Entity as DriverEntity, Model};

#[derive(Clone)]
pub struct DriverRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DriverRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_model(&self, user_id: Uuid) -> Result<Model, DriverRepositoryError> {
        DriverEntity::find()
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|e| DriverRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(DriverRepositoryError::NotFound)
    }

    fn to_profile(model: Model) -> Result<DriverProfile, DriverRepositoryError> {
        model.to_profile().ok_or_else(|| {
            DriverRepositoryError::DatabaseError("Unknown availability value".to_string())
        })
    }
}

#[async_trait]
impl DriverRepository for DriverRepositoryPostgres {
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<DriverProfile, DriverRepositoryError> {
        let model = self.find_model(user_id).await?;
        Self::to_profile(model)
    }

    async fn find_by_id(&self, driver_id: Uuid) -> Result<DriverProfile, DriverRepositoryError> {
        let model = DriverEntity::find_by_id(driver_id)
            .one(&*self.db)
            .await
            .map_err(|e| DriverRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(DriverRepositoryError::NotFound)?;

        Self::to_profile(model)
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: UpdateDriverProfileData,
    ) -> Result<DriverProfile, DriverRepositoryError> {
        let found = self.find_model(user_id).await?;

        let mut active: ActiveModel = found.into();
        active.vehicle_type = Set(data.vehicle_type);
        active.vehicle_plate = Set(data.vehicle_plate);
        active.license_number = Set(data.license_number);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| DriverRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_profile(updated)
    }

    async fn set_availability(
        &self,
        user_id: Uuid,
        availability: DriverAvailability,
    ) -> Result<DriverProfile, DriverRepositoryError> {
        let found = self.find_model(user_id).await?;

        let mut active: ActiveModel = found.into();
        active.availability = Set(availability.as_str().to_string());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| DriverRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_profile(updated)
    }

    async fn attach_to_vendor(
        &self,
        driver_id: Uuid,
        vendor_id: Uuid,
    ) -> Result<DriverProfile, DriverRepositoryError> {
        let found = DriverEntity::find_by_id(driver_id)
            .one(&*self.db)
            .await
            .map_err(|e| DriverRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(DriverRepositoryError::NotFound)?;

        if found.vendor_id.is_some() {
            return Err(DriverRepositoryError::AlreadyAttached);
        }

        // Only approved driver accounts can join a fleet.
        let user = users::Entity::find_by_id(found.user_id)
            .one(&*self.db)
            .await
            .map_err(|e| DriverRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(DriverRepositoryError::NotFound)?;

        if user.status != "active" || user.is_deleted {
            return Err(DriverRepositoryError::DriverNotApproved);
        }

        let mut active: ActiveModel = found.into();
        active.vendor_id = Set(Some(vendor_id));

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| DriverRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_profile(updated)
    }

    async fn list_for_vendor(
        &self,
        vendor_id: Uuid,
    ) -> Result<Vec<DriverProfile>, DriverRepositoryError> {
        let rows = DriverEntity::find()
            .filter(Column::VendorId.eq(vendor_id))
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| DriverRepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::to_profile).collect()
    }
}
