use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::payment::application::domain::entities::{PaymentMethod, PaymentStatus};

#[derive(Debug, Clone)]
pub struct PaymentRecord {
    pub id: Uuid,
    pub order_id: Uuid,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub tx_ref: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PaymentRepositoryError {
    #[error("Payment not found")]
    NotFound,

    #[error("Payment is not pending")]
    NotPending,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn find_by_order_id(
        &self,
        order_id: Uuid,
    ) -> Result<PaymentRecord, PaymentRepositoryError>;

    /// Marks a pending payment paid, recording the reference and the
    /// settlement time. Fails with `NotPending` otherwise.
    async fn mark_paid(
        &self,
        order_id: Uuid,
        tx_ref: String,
    ) -> Result<PaymentRecord, PaymentRepositoryError>;
}
