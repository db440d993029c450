use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::order::application::ports::outgoing::OrderWithItems;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetOrderError {
    #[error("Order not found")]
    NotFound,

    #[error("Order is not visible to this account")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Single-order fetch with ownership check: the customer who placed it,
/// the vendor it targets, the assigned driver, or an admin.
#[async_trait]
pub trait GetOrderUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        role: UserRole,
        order_id: Uuid,
    ) -> Result<OrderWithItems, GetOrderError>;
}
