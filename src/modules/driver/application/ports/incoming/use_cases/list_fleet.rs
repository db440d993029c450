use async_trait::async_trait;
use uuid::Uuid;

use crate::driver::application::ports::outgoing::DriverProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListFleetError {
    #[error("Vendor profile not found")]
    VendorNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListFleetUseCase: Send + Sync {
    async fn execute(&self, vendor_user_id: Uuid) -> Result<Vec<DriverProfile>, ListFleetError>;
}
