use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::driver::application::domain::entities::DriverAvailability;
use crate::driver::application::ports::outgoing::{DriverRepository, DriverRepositoryError};
use crate::notification::application::domain::entities::NotificationKind;
use crate::notification::application::ports::outgoing::{NotificationDraft, NotificationPublisher};
use crate::order::application::domain::OrderStatus;
use crate::order::application::ports::incoming::use_cases::{
    AssignDriverError, AssignDriverUseCase,
};
use crate::order::application::ports::outgoing::{
    OrderRecord, OrderRepository, OrderRepositoryError,
};
use crate::vendor::application::ports::outgoing::{VendorRepository, VendorRepositoryError};

pub struct AssignDriverService<O: OrderRepository, V: VendorRepository, D: DriverRepository> {
    order_repository: O,
    vendor_repository: V,
    driver_repository: D,
    publisher: Arc<dyn NotificationPublisher>,
}

impl<O: OrderRepository, V: VendorRepository, D: DriverRepository> AssignDriverService<O, V, D> {
    pub fn new(
        order_repository: O,
        vendor_repository: V,
        driver_repository: D,
        publisher: Arc<dyn NotificationPublisher>,
    ) -> Self {
        Self {
            order_repository,
            vendor_repository,
            driver_repository,
            publisher,
        }
    }
}

#[async_trait]
impl<O: OrderRepository, V: VendorRepository, D: DriverRepository> AssignDriverUseCase
    for AssignDriverService<O, V, D>
{
    async fn execute(
        &self,
        vendor_user_id: Uuid,
        order_id: Uuid,
        driver_id: Uuid,
    ) -> Result<OrderRecord, AssignDriverError> {
        let vendor = self
            .vendor_repository
            .find_by_user_id(vendor_user_id)
            .await
            .map_err(|e| match e {
                VendorRepositoryError::NotFound => AssignDriverError::VendorNotFound,
                other => AssignDriverError::RepositoryError(other.to_string()),
            })?;

        let order = self
            .order_repository
            .find_by_id(order_id)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::NotFound => AssignDriverError::OrderNotFound,
                other => AssignDriverError::RepositoryError(other.to_string()),
            })?;

        if order.vendor_id != vendor.id {
            return Err(AssignDriverError::NotOwner);
        }
        if !order.status.can_transition(OrderStatus::Assigned) {
            return Err(AssignDriverError::InvalidTransition { from: order.status });
        }

        let driver = self
            .driver_repository
            .find_by_id(driver_id)
            .await
            .map_err(|e| match e {
                DriverRepositoryError::NotFound => AssignDriverError::DriverNotFound,
                other => AssignDriverError::RepositoryError(other.to_string()),
            })?;

        if driver.vendor_id != Some(vendor.id) {
            return Err(AssignDriverError::DriverNotInFleet);
        }
        if driver.availability != DriverAvailability::Available {
            return Err(AssignDriverError::DriverUnavailable);
        }

        // The repository flips the driver to busy with a conditional
        // update, so a race against another assignment loses cleanly.
        let updated = self
            .order_repository
            .assign_driver(order_id, driver_id)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::DriverUnavailable => AssignDriverError::DriverUnavailable,
                OrderRepositoryError::StaleStatus(from) => {
                    AssignDriverError::InvalidTransition { from }
                }
                other => AssignDriverError::RepositoryError(other.to_string()),
            })?;

        self.publisher
            .publish(NotificationDraft::order_event(
                driver.user_id,
                NotificationKind::OrderStatusChanged,
                updated.id,
                "Delivery assigned",
                format!("Pick up order for {}", updated.delivery_address),
            ))
            .await;
        self.publisher
            .publish(NotificationDraft::order_event(
                updated.customer_id,
                NotificationKind::OrderStatusChanged,
                updated.id,
                "Driver assigned",
                "A driver has been assigned to your order".to_string(),
            ))
            .await;

        Ok(updated)
    }
}
