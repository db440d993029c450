use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::driver::application::ports::outgoing::{DriverRepository, DriverRepositoryError};
use crate::notification::application::domain::entities::NotificationKind;
use crate::notification::application::ports::outgoing::{NotificationDraft, NotificationPublisher};
use crate::order::application::domain::OrderStatus;
use crate::order::application::ports::incoming::use_cases::{
    DeliverOrderError, DeliverOrderUseCase,
};
use crate::order::application::ports::outgoing::{
    OrderRecord, OrderRepository, OrderRepositoryError,
};
use crate::payment::application::domain::entities::PaymentStatus;
use crate::payment::application::ports::outgoing::{PaymentRepository, PaymentRepositoryError};
use crate::vendor::application::ports::outgoing::VendorRepository;

pub struct DeliverOrderService<
    O: OrderRepository,
    D: DriverRepository,
    P: PaymentRepository,
    V: VendorRepository,
> {
    order_repository: O,
    driver_repository: D,
    payment_repository: P,
    vendor_repository: V,
    publisher: Arc<dyn NotificationPublisher>,
}

impl<O: OrderRepository, D: DriverRepository, P: PaymentRepository, V: VendorRepository>
    DeliverOrderService<O, D, P, V>
{
    pub fn new(
        order_repository: O,
        driver_repository: D,
        payment_repository: P,
        vendor_repository: V,
        publisher: Arc<dyn NotificationPublisher>,
    ) -> Self {
        Self {
            order_repository,
            driver_repository,
            payment_repository,
            vendor_repository,
            publisher,
        }
    }
}

#[async_trait]
impl<O: OrderRepository, D: DriverRepository, P: PaymentRepository, V: VendorRepository>
    DeliverOrderUseCase for DeliverOrderService<O, D, P, V>
{
    async fn execute(
        &self,
        driver_user_id: Uuid,
        order_id: Uuid,
    ) -> Result<OrderRecord, DeliverOrderError> {
        let driver = self
            .driver_repository
            .find_by_user_id(driver_user_id)
            .await
            .map_err(|e| match e {
                DriverRepositoryError::NotFound => DeliverOrderError::DriverNotFound,
                other => DeliverOrderError::RepositoryError(other.to_string()),
            })?;

        let order = self
            .order_repository
            .find_by_id(order_id)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::NotFound => DeliverOrderError::OrderNotFound,
                other => DeliverOrderError::RepositoryError(other.to_string()),
            })?;

        if order.driver_id != Some(driver.id) {
            return Err(DeliverOrderError::NotAssignedDriver);
        }
        if !order.status.can_transition(OrderStatus::Delivered) {
            return Err(DeliverOrderError::InvalidTransition { from: order.status });
        }

        let payment = self
            .payment_repository
            .find_by_order_id(order_id)
            .await
            .map_err(|e| match e {
                PaymentRepositoryError::NotFound => DeliverOrderError::PaymentMissing,
                other => DeliverOrderError::RepositoryError(other.to_string()),
            })?;
        let settle_cod =
            payment.method.is_cash_on_delivery() && payment.status == PaymentStatus::Pending;

        let updated = self
            .order_repository
            .deliver(order_id, driver.id, settle_cod)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::StaleStatus(from) => {
                    DeliverOrderError::InvalidTransition { from }
                }
                other => DeliverOrderError::RepositoryError(other.to_string()),
            })?;

        self.publisher
            .publish(NotificationDraft::order_event(
                updated.customer_id,
                NotificationKind::OrderStatusChanged,
                updated.id,
                "Order delivered",
                "Your fuel has been delivered".to_string(),
            ))
            .await;
        if let Ok(vendor) = self.vendor_repository.find_by_id(updated.vendor_id).await {
            self.publisher
                .publish(NotificationDraft::order_event(
                    vendor.user_id,
                    NotificationKind::OrderStatusChanged,
                    updated.id,
                    "Order delivered",
                    format!("Order {} has been delivered", updated.id),
                ))
                .await;
            if settle_cod {
                self.publisher
                    .publish(NotificationDraft::order_event(
                        vendor.user_id,
                        NotificationKind::PaymentSettled,
                        updated.id,
                        "Payment settled",
                        "Cash payment collected on delivery".to_string(),
                    ))
                    .await;
            }
        }

        Ok(updated)
    }
}
