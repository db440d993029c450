use async_trait::async_trait;
use uuid::Uuid;

use crate::driver::application::domain::entities::DriverAvailability;
use crate::driver::application::ports::outgoing::DriverProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetAvailabilityError {
    #[error("Driver profile not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SetAvailabilityUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        availability: DriverAvailability,
    ) -> Result<DriverProfile, SetAvailabilityError>;
}
