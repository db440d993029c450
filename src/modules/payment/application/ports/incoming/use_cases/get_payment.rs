use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::payment::application::ports::outgoing::PaymentRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPaymentError {
    #[error("Order not found")]
    OrderNotFound,

    #[error("Payment not found")]
    PaymentNotFound,

    #[error("Payment is not visible to this account")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Payment lookup with the same visibility rules as the order itself.
#[async_trait]
pub trait GetPaymentUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        role: UserRole,
        order_id: Uuid,
    ) -> Result<PaymentRecord, GetPaymentError>;
}
