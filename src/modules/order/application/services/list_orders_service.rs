use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::driver::application::ports::outgoing::{DriverRepository, DriverRepositoryError};
use crate::order::application::ports::incoming::use_cases::{ListOrdersError, ListOrdersUseCase};
use crate::order::application::ports::outgoing::{OrderRecord, OrderRepository};
use crate::vendor::application::ports::outgoing::{VendorRepository, VendorRepositoryError};

pub struct ListOrdersService<O: OrderRepository, V: VendorRepository, D: DriverRepository> {
    order_repository: O,
    vendor_repository: V,
    driver_repository: D,
}

impl<O: OrderRepository, V: VendorRepository, D: DriverRepository> ListOrdersService<O, V, D> {
    pub fn new(order_repository: O, vendor_repository: V, driver_repository: D) -> Self {
        Self {
            order_repository,
            vendor_repository,
            driver_repository,
        }
    }
}

#[async_trait]
impl<O: OrderRepository, V: VendorRepository, D: DriverRepository> ListOrdersUseCase
    for ListOrdersService<O, V, D>
{
    async fn execute(
        &self,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<Vec<OrderRecord>, ListOrdersError> {
        match role {
            UserRole::Customer => self
                .order_repository
                .list_for_customer(user_id)
                .await
                .map_err(|e| ListOrdersError::RepositoryError(e.to_string())),
            UserRole::Vendor => {
                let vendor = self
                    .vendor_repository
                    .find_by_user_id(user_id)
                    .await
                    .map_err(|e| match e {
                        VendorRepositoryError::NotFound => ListOrdersError::ProfileNotFound,
                        other => ListOrdersError::RepositoryError(other.to_string()),
                    })?;
                self.order_repository
                    .list_for_vendor(vendor.id)
                    .await
                    .map_err(|e| ListOrdersError::RepositoryError(e.to_string()))
            }
            UserRole::Driver => {
                let driver = self
                    .driver_repository
                    .find_by_user_id(user_id)
                    .await
                    .map_err(|e| match e {
                        DriverRepositoryError::NotFound => ListOrdersError::ProfileNotFound,
                        other => ListOrdersError::RepositoryError(other.to_string()),
                    })?;
                self.order_repository
                    .list_for_driver(driver.id)
                    .await
                    .map_err(|e| ListOrdersError::RepositoryError(e.to_string()))
            }
            UserRole::Admin => Err(ListOrdersError::UnsupportedRole),
        }
    }
}
