use async_trait::async_trait;
use uuid::Uuid;

use crate::driver::application::ports::outgoing::DriverProfile;

#[derive(Debug, Clone)]
pub struct UpdateDriverProfileCommand {
    vehicle_type: String,
    vehicle_plate: String,
    license_number: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateDriverProfileCommandError {
    #[error("Vehicle type cannot be empty")]
    EmptyVehicleType,

    #[error("Vehicle plate cannot be empty")]
    EmptyVehiclePlate,

    #[error("Vehicle plate too long")]
    VehiclePlateTooLong,

    #[error("License number cannot be empty")]
    EmptyLicenseNumber,
}

impl UpdateDriverProfileCommand {
    pub fn new(
        vehicle_type: String,
        vehicle_plate: String,
        license_number: String,
    ) -> Result<Self, UpdateDriverProfileCommandError> {
        let vehicle_type = vehicle_type.trim().to_string();
        if vehicle_type.is_empty() {
            return Err(UpdateDriverProfileCommandError::EmptyVehicleType);
        }

        let vehicle_plate = vehicle_plate.trim().to_uppercase();
        if vehicle_plate.is_empty() {
            return Err(UpdateDriverProfileCommandError::EmptyVehiclePlate);
        }
        if vehicle_plate.len() > 20 {
            return Err(UpdateDriverProfileCommandError::VehiclePlateTooLong);
        }

        let license_number = license_number.trim().to_string();
        if license_number.is_empty() {
            return Err(UpdateDriverProfileCommandError::EmptyLicenseNumber);
        }

        Ok(Self {
            vehicle_type,
            vehicle_plate,
            license_number,
        })
    }

    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    pub fn vehicle_plate(&self) -> &str {
        &self.vehicle_plate
    }

    pub fn license_number(&self) -> &str {
        &self.license_number
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateDriverProfileError {
    #[error("Driver profile not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateDriverProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        command: UpdateDriverProfileCommand,
    ) -> Result<DriverProfile, UpdateDriverProfileError>;
}
