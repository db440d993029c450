use async_trait::async_trait;
use uuid::Uuid;

use crate::driver::application::ports::incoming::use_cases::{LinkDriverError, LinkDriverUseCase};
use crate::driver::application::ports::outgoing::{
    DriverProfile, DriverRepository, DriverRepositoryError,
};
use crate::vendor::application::ports::outgoing::{VendorRepository, VendorRepositoryError};

/// Resolves the caller's vendor row first, then performs the attach.
/// The repository enforces approved and unattached in the same update.
pub struct LinkDriverService<D: DriverRepository, V: VendorRepository> {
    driver_repository: D,
    vendor_repository: V,
}

impl<D: DriverRepository, V: VendorRepository> LinkDriverService<D, V> {
    pub fn new(driver_repository: D, vendor_repository: V) -> Self {
        Self {
            driver_repository,
            vendor_repository,
        }
    }
}

#[async_trait]
impl<D: DriverRepository, V: VendorRepository> LinkDriverUseCase for LinkDriverService<D, V> {
    async fn execute(
        &self,
        vendor_user_id: Uuid,
        driver_id: Uuid,
    ) -> Result<DriverProfile, LinkDriverError> {
        let vendor = self
            .vendor_repository
            .find_by_user_id(vendor_user_id)
            .await
            .map_err(|e| match e {
                VendorRepositoryError::NotFound => LinkDriverError::VendorNotFound,
                other => LinkDriverError::RepositoryError(other.to_string()),
            })?;

        self.driver_repository
            .attach_to_vendor(driver_id, vendor.id)
            .await
            .map_err(|e| match e {
                DriverRepositoryError::NotFound => LinkDriverError::DriverNotFound,
                DriverRepositoryError::DriverNotApproved => LinkDriverError::DriverNotApproved,
                DriverRepositoryError::AlreadyAttached => LinkDriverError::AlreadyAttached,
                other => LinkDriverError::RepositoryError(other.to_string()),
            })
    }
}
