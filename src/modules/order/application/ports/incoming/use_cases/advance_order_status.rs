use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::domain::OrderStatus;
use crate::order::application::ports::outgoing::OrderRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdvanceOrderStatusError {
    #[error("Order not found")]
    OrderNotFound,

    #[error("Driver profile not found")]
    DriverNotFound,

    #[error("Order is not assigned to you")]
    NotAssignedDriver,

    #[error("Drivers can only move orders to picked_up or in_transit")]
    UnsupportedTarget,

    #[error("Cannot move order from {} to {}", .from.as_str(), .to.as_str())]
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Driver progress updates along the delivery path. Delivery itself goes
/// through the dedicated deliver operation so settlement cannot be skipped.
#[async_trait]
pub trait AdvanceOrderStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        driver_user_id: Uuid,
        order_id: Uuid,
        target: OrderStatus,
    ) -> Result<OrderRecord, AdvanceOrderStatusError>;
}
