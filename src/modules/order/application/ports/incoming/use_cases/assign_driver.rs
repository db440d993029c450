use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::domain::OrderStatus;
use crate::order::application::ports::outgoing::OrderRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AssignDriverError {
    #[error("Order not found")]
    OrderNotFound,

    #[error("Vendor profile not found")]
    VendorNotFound,

    #[error("Order belongs to another vendor")]
    NotOwner,

    #[error("Driver not found")]
    DriverNotFound,

    #[error("Driver is not in your fleet")]
    DriverNotInFleet,

    #[error("Driver is not available")]
    DriverUnavailable,

    #[error("Order is {} and cannot be assigned", .from.as_str())]
    InvalidTransition { from: OrderStatus },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Vendor operation: hand an accepted order to an available fleet driver.
/// The driver flips to `busy` in the same transaction as the status write.
#[async_trait]
pub trait AssignDriverUseCase: Send + Sync {
    async fn execute(
        &self,
        vendor_user_id: Uuid,
        order_id: Uuid,
        driver_id: Uuid,
    ) -> Result<OrderRecord, AssignDriverError>;
}
