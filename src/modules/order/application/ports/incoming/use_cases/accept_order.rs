use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::domain::OrderStatus;
use crate::order::application::ports::outgoing::OrderRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AcceptOrderError {
    #[error("Order not found")]
    OrderNotFound,

    #[error("Vendor profile not found")]
    VendorNotFound,

    #[error("Order belongs to another vendor")]
    NotOwner,

    #[error("Order is {} and cannot be accepted", .from.as_str())]
    InvalidTransition { from: OrderStatus },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AcceptOrderUseCase: Send + Sync {
    async fn execute(
        &self,
        vendor_user_id: Uuid,
        order_id: Uuid,
    ) -> Result<OrderRecord, AcceptOrderError>;
}
