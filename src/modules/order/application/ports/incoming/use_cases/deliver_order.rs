use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::domain::OrderStatus;
use crate::order::application::ports::outgoing::OrderRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeliverOrderError {
    #[error("Order not found")]
    OrderNotFound,

    #[error("Driver profile not found")]
    DriverNotFound,

    #[error("Order is not assigned to you")]
    NotAssignedDriver,

    #[error("Order is {} and cannot be delivered", .from.as_str())]
    InvalidTransition { from: OrderStatus },

    #[error("No payment record for this order")]
    PaymentMissing,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Completes the delivery. For cash on delivery the order, the payment
/// and the driver's availability settle in one transaction.
#[async_trait]
pub trait DeliverOrderUseCase: Send + Sync {
    async fn execute(
        &self,
        driver_user_id: Uuid,
        order_id: Uuid,
    ) -> Result<OrderRecord, DeliverOrderError>;
}
