use async_trait::async_trait;
use uuid::Uuid;

use crate::driver::application::ports::incoming::use_cases::{
    GetDriverProfileError, GetDriverProfileUseCase,
};
use crate::driver::application::ports::outgoing::{
    DriverProfile, DriverRepository, DriverRepositoryError,
};

pub struct GetDriverProfileService<R: DriverRepository> {
    repository: R,
}

impl<R: DriverRepository> GetDriverProfileService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: DriverRepository> GetDriverProfileUseCase for GetDriverProfileService<R> {
    async fn execute(&self, user_id: Uuid) -> Result<DriverProfile, GetDriverProfileError> {
        self.repository
            .find_by_user_id(user_id)
            .await
            .map_err(|e| match e {
                DriverRepositoryError::NotFound => GetDriverProfileError::NotFound,
                other => GetDriverProfileError::RepositoryError(other.to_string()),
            })
    }
}
