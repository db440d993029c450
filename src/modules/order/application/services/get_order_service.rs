use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::driver::application::ports::outgoing::DriverRepository;
use crate::order::application::ports::incoming::use_cases::{GetOrderError, GetOrderUseCase};
use crate::order::application::ports::outgoing::{
    OrderRepository, OrderRepositoryError, OrderWithItems,
};
use crate::vendor::application::ports::outgoing::VendorRepository;

pub struct GetOrderService<O: OrderRepository, V: VendorRepository, D: DriverRepository> {
    order_repository: O,
    vendor_repository: V,
    driver_repository: D,
}

impl<O: OrderRepository, V: VendorRepository, D: DriverRepository> GetOrderService<O, V, D> {
    pub fn new(order_repository: O, vendor_repository: V, driver_repository: D) -> Self {
        Self {
            order_repository,
            vendor_repository,
            driver_repository,
        }
    }
}

#[async_trait]
impl<O: OrderRepository, V: VendorRepository, D: DriverRepository> GetOrderUseCase
    for GetOrderService<O, V, D>
{
    async fn execute(
        &self,
        user_id: Uuid,
        role: UserRole,
        order_id: Uuid,
    ) -> Result<OrderWithItems, GetOrderError> {
        let found = self
            .order_repository
            .find_with_items(order_id)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::NotFound => GetOrderError::NotFound,
                other => GetOrderError::RepositoryError(other.to_string()),
            })?;

        let visible = match role {
            UserRole::Admin => true,
            UserRole::Customer => found.order.customer_id == user_id,
            UserRole::Vendor => match self.vendor_repository.find_by_user_id(user_id).await {
                Ok(vendor) => found.order.vendor_id == vendor.id,
                Err(_) => false,
            },
            UserRole::Driver => match self.driver_repository.find_by_user_id(user_id).await {
                Ok(driver) => found.order.driver_id == Some(driver.id),
                Err(_) => false,
            },
        };
        if !visible {
            return Err(GetOrderError::Forbidden);
        }

        Ok(found)
    }
}
