use std::sync::Arc;

use crate::driver::application::ports::incoming::use_cases::{
    GetDriverProfileUseCase, LinkDriverUseCase, ListFleetUseCase, SetAvailabilityUseCase,
    UpdateDriverProfileUseCase,
};

/// Driver and fleet use cases wired into the application state.
#[derive(Clone)]
pub struct DriverUseCases {
    pub get_profile: Arc<dyn GetDriverProfileUseCase>,
    pub update_profile: Arc<dyn UpdateDriverProfileUseCase>,
    pub set_availability: Arc<dyn SetAvailabilityUseCase>,
    pub link_driver: Arc<dyn LinkDriverUseCase>,
    pub list_fleet: Arc<dyn ListFleetUseCase>,
}
