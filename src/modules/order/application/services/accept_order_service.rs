use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::notification::application::domain::entities::NotificationKind;
use crate::notification::application::ports::outgoing::{NotificationDraft, NotificationPublisher};
use crate::order::application::domain::OrderStatus;
use crate::order::application::ports::incoming::use_cases::{AcceptOrderError, AcceptOrderUseCase};
use crate::order::application::ports::outgoing::{
    OrderRecord, OrderRepository, OrderRepositoryError,
};
use crate::vendor::application::ports::outgoing::{VendorRepository, VendorRepositoryError};

pub struct AcceptOrderService<O: OrderRepository, V: VendorRepository> {
    order_repository: O,
    vendor_repository: V,
    publisher: Arc<dyn NotificationPublisher>,
}

impl<O: OrderRepository, V: VendorRepository> AcceptOrderService<O, V> {
    pub fn new(
        order_repository: O,
        vendor_repository: V,
        publisher: Arc<dyn NotificationPublisher>,
    ) -> Self {
        Self {
            order_repository,
            vendor_repository,
            publisher,
        }
    }
}

#[async_trait]
impl<O: OrderRepository, V: VendorRepository> AcceptOrderUseCase for AcceptOrderService<O, V> {
    async fn execute(
        &self,
        vendor_user_id: Uuid,
        order_id: Uuid,
    ) -> Result<OrderRecord, AcceptOrderError> {
        let vendor = self
            .vendor_repository
            .find_by_user_id(vendor_user_id)
            .await
            .map_err(|e| match e {
                VendorRepositoryError::NotFound => AcceptOrderError::VendorNotFound,
                other => AcceptOrderError::RepositoryError(other.to_string()),
            })?;

        let order = self
            .order_repository
            .find_by_id(order_id)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::NotFound => AcceptOrderError::OrderNotFound,
                other => AcceptOrderError::RepositoryError(other.to_string()),
            })?;

        if order.vendor_id != vendor.id {
            return Err(AcceptOrderError::NotOwner);
        }
        if !order.status.can_transition(OrderStatus::Accepted) {
            return Err(AcceptOrderError::InvalidTransition { from: order.status });
        }

        let updated = self
            .order_repository
            .set_status(order_id, order.status, OrderStatus::Accepted)
            .await
            .map_err(|e| match e {
                // Someone moved the order between our read and the write.
                OrderRepositoryError::StaleStatus(from) => {
                    AcceptOrderError::InvalidTransition { from }
                }
                other => AcceptOrderError::RepositoryError(other.to_string()),
            })?;

        self.publisher
            .publish(NotificationDraft::order_event(
                updated.customer_id,
                NotificationKind::OrderStatusChanged,
                updated.id,
                "Order accepted",
                format!("{} accepted your order", vendor.business_name),
            ))
            .await;

        Ok(updated)
    }
}
