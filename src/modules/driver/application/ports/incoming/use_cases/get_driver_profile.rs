use async_trait::async_trait;
use uuid::Uuid;

use crate::driver::application::ports::outgoing::DriverProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetDriverProfileError {
    #[error("Driver profile not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetDriverProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<DriverProfile, GetDriverProfileError>;
}
