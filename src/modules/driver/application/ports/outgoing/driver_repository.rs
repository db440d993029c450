use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::driver::application::domain::entities::DriverAvailability;

#[derive(Debug, Clone)]
pub struct DriverProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vendor_id: Option<Uuid>,
    pub vehicle_type: String,
    pub vehicle_plate: String,
    pub license_number: String,
    pub availability: DriverAvailability,
    pub rating_avg: Decimal,
    pub rating_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UpdateDriverProfileData {
    pub vehicle_type: String,
    pub vehicle_plate: String,
    pub license_number: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DriverRepositoryError {
    #[error("Driver not found")]
    NotFound,

    #[error("Driver account has not been approved")]
    DriverNotApproved,

    #[error("Driver already belongs to a fleet")]
    AlreadyAttached,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DriverRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: Uuid)
        -> Result<DriverProfile, DriverRepositoryError>;

    async fn find_by_id(&self, driver_id: Uuid) -> Result<DriverProfile, DriverRepositoryError>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: UpdateDriverProfileData,
    ) -> Result<DriverProfile, DriverRepositoryError>;

    async fn set_availability(
        &self,
        user_id: Uuid,
        availability: DriverAvailability,
    ) -> Result<DriverProfile, DriverRepositoryError>;

    /// Links an approved, unattached driver to a vendor's fleet. The
    /// unattached check and the link are one conditional update.
    async fn attach_to_vendor(
        &self,
        driver_id: Uuid,
        vendor_id: Uuid,
    ) -> Result<DriverProfile, DriverRepositoryError>;

    async fn list_for_vendor(
        &self,
        vendor_id: Uuid,
    ) -> Result<Vec<DriverProfile>, DriverRepositoryError>;
}
