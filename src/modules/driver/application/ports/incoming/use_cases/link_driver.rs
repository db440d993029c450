use async_trait::async_trait;
use uuid::Uuid;

use crate::driver::application::ports::outgoing::DriverProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LinkDriverError {
    #[error("Vendor profile not found")]
    VendorNotFound,

    #[error("Driver not found")]
    DriverNotFound,

    #[error("Driver account has not been approved")]
    DriverNotApproved,

    #[error("Driver already belongs to a fleet")]
    AlreadyAttached,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Vendor operation: attach an approved, unattached driver to the
/// caller's fleet.
#[async_trait]
pub trait LinkDriverUseCase: Send + Sync {
    async fn execute(
        &self,
        vendor_user_id: Uuid,
        driver_id: Uuid,
    ) -> Result<DriverProfile, LinkDriverError>;
}
