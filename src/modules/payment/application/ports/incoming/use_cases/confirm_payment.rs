use async_trait::async_trait;
use uuid::Uuid;

use crate::payment::application::ports::outgoing::PaymentRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfirmPaymentError {
    #[error("Order not found")]
    OrderNotFound,

    #[error("Order belongs to another customer")]
    NotOwner,

    #[error("Cash on delivery settles when the driver delivers")]
    CodNotConfirmable,

    #[error("No payment record for this order")]
    PaymentNotFound,

    #[error("Payment has already been settled")]
    NotPending,

    #[error("Transaction reference cannot be empty")]
    EmptyReference,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Customer confirmation for card and transfer payments. Cash on
/// delivery never goes through here.
#[async_trait]
pub trait ConfirmPaymentUseCase: Send + Sync {
    async fn execute(
        &self,
        customer_id: Uuid,
        order_id: Uuid,
        tx_ref: String,
    ) -> Result<PaymentRecord, ConfirmPaymentError>;
}
