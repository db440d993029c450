use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::domain::OrderStatus;
use crate::order::application::ports::outgoing::OrderRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CancelOrderError {
    #[error("Order not found")]
    OrderNotFound,

    #[error("Order belongs to another customer")]
    NotOwner,

    #[error("Order is {} and can no longer be cancelled", .from.as_str())]
    InvalidTransition { from: OrderStatus },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Customer cancellation, allowed while the order is pending or accepted.
/// Items are restocked in the same transaction as the status write.
#[async_trait]
pub trait CancelOrderUseCase: Send + Sync {
    async fn execute(
        &self,
        customer_id: Uuid,
        order_id: Uuid,
    ) -> Result<OrderRecord, CancelOrderError>;
}
