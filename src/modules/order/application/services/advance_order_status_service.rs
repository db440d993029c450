use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::driver::application::ports::outgoing::{DriverRepository, DriverRepositoryError};
use crate::notification::application::domain::entities::NotificationKind;
use crate::notification::application::ports::outgoing::{NotificationDraft, NotificationPublisher};
use crate::order::application::domain::OrderStatus;
use crate::order::application::ports::incoming::use_cases::{
    AdvanceOrderStatusError, AdvanceOrderStatusUseCase,
};
use crate::order::application::ports::outgoing::{
    OrderRecord, OrderRepository, OrderRepositoryError,
};

pub struct AdvanceOrderStatusService<O: OrderRepository, D: DriverRepository> {
    order_repository: O,
    driver_repository: D,
    publisher: Arc<dyn NotificationPublisher>,
}

impl<O: OrderRepository, D: DriverRepository> AdvanceOrderStatusService<O, D> {
    pub fn new(
        order_repository: O,
        driver_repository: D,
        publisher: Arc<dyn NotificationPublisher>,
    ) -> Self {
        Self {
            order_repository,
            driver_repository,
            publisher,
        }
    }
}

#[async_trait]
impl<O: OrderRepository, D: DriverRepository> AdvanceOrderStatusUseCase
    for AdvanceOrderStatusService<O, D>
{
    async fn execute(
        &self,
        driver_user_id: Uuid,
        order_id: Uuid,
        target: OrderStatus,
    ) -> Result<OrderRecord, AdvanceOrderStatusError> {
        if !matches!(target, OrderStatus::PickedUp | OrderStatus::InTransit) {
            return Err(AdvanceOrderStatusError::UnsupportedTarget);
        }

        let driver = self
            .driver_repository
            .find_by_user_id(driver_user_id)
            .await
            .map_err(|e| match e {
                DriverRepositoryError::NotFound => AdvanceOrderStatusError::DriverNotFound,
                other => AdvanceOrderStatusError::RepositoryError(other.to_string()),
            })?;

        let order = self
            .order_repository
            .find_by_id(order_id)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::NotFound => AdvanceOrderStatusError::OrderNotFound,
                other => AdvanceOrderStatusError::RepositoryError(other.to_string()),
            })?;

        if order.driver_id != Some(driver.id) {
            return Err(AdvanceOrderStatusError::NotAssignedDriver);
        }
        if !order.status.can_transition(target) {
            return Err(AdvanceOrderStatusError::InvalidTransition {
                from: order.status,
                to: target,
            });
        }

        let updated = self
            .order_repository
            .set_status(order_id, order.status, target)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::StaleStatus(from) => {
                    AdvanceOrderStatusError::InvalidTransition { from, to: target }
                }
                other => AdvanceOrderStatusError::RepositoryError(other.to_string()),
            })?;

        let body = match target {
            OrderStatus::PickedUp => "Your fuel has been picked up",
            _ => "Your fuel is on the way",
        };
        self.publisher
            .publish(NotificationDraft::order_event(
                updated.customer_id,
                NotificationKind::OrderStatusChanged,
                updated.id,
                "Order update",
                body.to_string(),
            ))
            .await;

        Ok(updated)
    }
}
