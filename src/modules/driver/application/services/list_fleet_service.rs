use async_trait::async_trait;
use uuid::Uuid;

use crate::driver::application::ports::incoming::use_cases::{ListFleetError, ListFleetUseCase};
use crate::driver::application::ports::outgoing::{DriverProfile, DriverRepository};
use crate::vendor::application::ports::outgoing::{VendorRepository, VendorRepositoryError};

pub struct ListFleetService<D: DriverRepository, V: VendorRepository> {
    driver_repository: D,
    vendor_repository: V,
}

impl<D: DriverRepository, V: VendorRepository> ListFleetService<D, V> {
    pub fn new(driver_repository: D, vendor_repository: V) -> Self {
        Self {
            driver_repository,
            vendor_repository,
        }
    }
}

#[async_trait]
impl<D: DriverRepository, V: VendorRepository> ListFleetUseCase for ListFleetService<D, V> {
    async fn execute(&self, vendor_user_id: Uuid) -> Result<Vec<DriverProfile>, ListFleetError> {
        let vendor = self
            .vendor_repository
            .find_by_user_id(vendor_user_id)
            .await
            .map_err(|e| match e {
                VendorRepositoryError::NotFound => ListFleetError::VendorNotFound,
                other => ListFleetError::RepositoryError(other.to_string()),
            })?;

        self.driver_repository
            .list_for_vendor(vendor.id)
            .await
            .map_err(|e| ListFleetError::RepositoryError(e.to_string()))
    }
}
