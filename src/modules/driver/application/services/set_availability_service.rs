use async_trait::async_trait;
use uuid::Uuid;

use crate::driver::application::domain::entities::DriverAvailability;
use crate::driver::application::ports::incoming::use_cases::{
    SetAvailabilityError, SetAvailabilityUseCase,
};
use crate::driver::application::ports::outgoing::{
    DriverProfile, DriverRepository, DriverRepositoryError,
};

pub struct SetAvailabilityService<R: DriverRepository> {
    repository: R,
}

impl<R: DriverRepository> SetAvailabilityService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: DriverRepository> SetAvailabilityUseCase for SetAvailabilityService<R> {
    async fn execute(
        &self,
        user_id: Uuid,
        availability: DriverAvailability,
    ) -> Result<DriverProfile, SetAvailabilityError> {
        self.repository
            .set_availability(user_id, availability)
            .await
            .map_err(|e| match e {
                DriverRepositoryError::NotFound => SetAvailabilityError::NotFound,
                other => SetAvailabilityError::RepositoryError(other.to_string()),
            })
    }
}
