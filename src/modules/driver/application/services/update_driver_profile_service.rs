use async_trait::async_trait;
use uuid::Uuid;

use crate::driver::application::ports::incoming::use_cases::{
    UpdateDriverProfileCommand, UpdateDriverProfileError, UpdateDriverProfileUseCase,
};
use crate::driver::application::ports::outgoing::{
    DriverProfile, DriverRepository, DriverRepositoryError, UpdateDriverProfileData,
};

pub struct UpdateDriverProfileService<R: DriverRepository> {
    repository: R,
}

impl<R: DriverRepository> UpdateDriverProfileService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: DriverRepository> UpdateDriverProfileUseCase for UpdateDriverProfileService<R> {
    async fn execute(
        &self,
        user_id: Uuid,
        command: UpdateDriverProfileCommand,
    ) -> Result<DriverProfile, UpdateDriverProfileError> {
        let data = UpdateDriverProfileData {
            vehicle_type: command.vehicle_type().to_string(),
            vehicle_plate: command.vehicle_plate().to_string(),
            license_number: command.license_number().to_string(),
        };

        self.repository
            .update_profile(user_id, data)
            .await
            .map_err(|e| match e {
                DriverRepositoryError::NotFound => UpdateDriverProfileError::NotFound,
                other => UpdateDriverProfileError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use std::sync::{Arc, Mutex};

    use crate::driver::application::domain::entities::DriverAvailability;

    fn profile(user_id: Uuid) -> DriverProfile {
        DriverProfile {
            id: Uuid::new_v4(),
            user_id,
            vendor_id: None,
            vehicle_type: "truck".to_string(),
            vehicle_plate: "AB-123-CD".to_string(),
            license_number: "DL-0001".to_string(),
            availability: DriverAvailability::Offline,
            rating_avg: Decimal::ZERO,
            rating_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    struct RecordingRepo {
        seen: Arc<Mutex<Option<UpdateDriverProfileData>>>,
        fail_not_found: bool,
    }

    #[async_trait]
    impl DriverRepository for RecordingRepo {
        async fn find_by_user_id(
            &self,
            _user_id: Uuid,
        ) -> Result<DriverProfile, DriverRepositoryError> {
            unimplemented!()
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<DriverProfile, DriverRepositoryError> {
            unimplemented!()
        }

        async fn update_profile(
            &self,
            user_id: Uuid,
            data: UpdateDriverProfileData,
        ) -> Result<DriverProfile, DriverRepositoryError> {
            if self.fail_not_found {
                return Err(DriverRepositoryError::NotFound);
            }
            let mut profile = profile(user_id);
            profile.vehicle_type = data.vehicle_type.clone();
            profile.vehicle_plate = data.vehicle_plate.clone();
            profile.license_number = data.license_number.clone();
            *self.seen.lock().unwrap() = Some(data);
            Ok(profile)
        }

        async fn set_availability(
            &self,
            _user_id: Uuid,
            _availability: DriverAvailability,
        ) -> Result<DriverProfile, DriverRepositoryError> {
            unimplemented!()
        }

        async fn attach_to_vendor(
            &self,
            _driver_id: Uuid,
            _vendor_id: Uuid,
        ) -> Result<DriverProfile, DriverRepositoryError> {
            unimplemented!()
        }

        async fn list_for_vendor(
            &self,
            _vendor_id: Uuid,
        ) -> Result<Vec<DriverProfile>, DriverRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn passes_normalized_command_fields_to_repository() {
        let seen = Arc::new(Mutex::new(None));
        let service = UpdateDriverProfileService::new(RecordingRepo {
            seen: seen.clone(),
            fail_not_found: false,
        });

        let command = UpdateDriverProfileCommand::new(
            "tanker".to_string(),
            "lnd-344-xa".to_string(),
            "DL-9912".to_string(),
        )
        .unwrap();

        let updated = service.execute(Uuid::new_v4(), command).await.unwrap();
        assert_eq!(updated.vehicle_plate, "LND-344-XA");

        let seen = seen.lock().unwrap().take().unwrap();
        assert_eq!(seen.vehicle_type, "tanker");
        assert_eq!(seen.license_number, "DL-9912");
    }

    #[tokio::test]
    async fn missing_profile_maps_to_not_found() {
        let service = UpdateDriverProfileService::new(RecordingRepo {
            seen: Arc::new(Mutex::new(None)),
            fail_not_found: true,
        });
        let command = UpdateDriverProfileCommand::new(
            "truck".to_string(),
            "AB-1".to_string(),
            "DL-1".to_string(),
        )
        .unwrap();

        let result = service.execute(Uuid::new_v4(), command).await;
        assert!(matches!(result, Err(UpdateDriverProfileError::NotFound)));
    }
}
