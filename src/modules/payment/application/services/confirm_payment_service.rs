use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::notification::application::domain::entities::NotificationKind;
use crate::notification::application::ports::outgoing::{NotificationDraft, NotificationPublisher};
use crate::order::application::ports::outgoing::{OrderRepository, OrderRepositoryError};
use crate::payment::application::ports::incoming::use_cases::{
    ConfirmPaymentError, ConfirmPaymentUseCase,
};
use crate::payment::application::ports::outgoing::{
    PaymentRecord, PaymentRepository, PaymentRepositoryError,
};
use crate::vendor::application::ports::outgoing::VendorRepository;

pub struct ConfirmPaymentService<P: PaymentRepository, O: OrderRepository, V: VendorRepository> {
    payment_repository: P,
    order_repository: O,
    vendor_repository: V,
    publisher: Arc<dyn NotificationPublisher>,
}

impl<P: PaymentRepository, O: OrderRepository, V: VendorRepository>
    ConfirmPaymentService<P, O, V>
{
    pub fn new(
        payment_repository: P,
        order_repository: O,
        vendor_repository: V,
        publisher: Arc<dyn NotificationPublisher>,
    ) -> Self {
        Self {
            payment_repository,
            order_repository,
            vendor_repository,
            publisher,
        }
    }
}

#[async_trait]
impl<P: PaymentRepository, O: OrderRepository, V: VendorRepository> ConfirmPaymentUseCase
    for ConfirmPaymentService<P, O, V>
{
    async fn execute(
        &self,
        customer_id: Uuid,
        order_id: Uuid,
        tx_ref: String,
    ) -> Result<PaymentRecord, ConfirmPaymentError> {
        let tx_ref = tx_ref.trim().to_string();
        if tx_ref.is_empty() {
            return Err(ConfirmPaymentError::EmptyReference);
        }

        let order = self
            .order_repository
            .find_by_id(order_id)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::NotFound => ConfirmPaymentError::OrderNotFound,
                other => ConfirmPaymentError::RepositoryError(other.to_string()),
            })?;

        if order.customer_id != customer_id {
            return Err(ConfirmPaymentError::NotOwner);
        }

        let payment = self
            .payment_repository
            .find_by_order_id(order_id)
            .await
            .map_err(|e| match e {
                PaymentRepositoryError::NotFound => ConfirmPaymentError::PaymentNotFound,
                other => ConfirmPaymentError::RepositoryError(other.to_string()),
            })?;

        if payment.method.is_cash_on_delivery() {
            return Err(ConfirmPaymentError::CodNotConfirmable);
        }

        let settled = self
            .payment_repository
            .mark_paid(order_id, tx_ref)
            .await
            .map_err(|e| match e {
                PaymentRepositoryError::NotPending => ConfirmPaymentError::NotPending,
                PaymentRepositoryError::NotFound => ConfirmPaymentError::PaymentNotFound,
                other => ConfirmPaymentError::RepositoryError(other.to_string()),
            })?;

        if let Ok(vendor) = self.vendor_repository.find_by_id(order.vendor_id).await {
            self.publisher
                .publish(NotificationDraft::order_event(
                    vendor.user_id,
                    NotificationKind::PaymentSettled,
                    order_id,
                    "Payment received",
                    format!("Payment for order {order_id} has been confirmed"),
                ))
                .await;
        }

        Ok(settled)
    }
}
