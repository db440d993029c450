pub mod get_driver_profile_service;
pub mod link_driver_service;
pub mod list_fleet_service;
pub mod set_availability_service;
pub mod update_driver_profile_service;

pub use get_driver_profile_service::GetDriverProfileService;
pub use link_driver_service::LinkDriverService;
pub use list_fleet_service::ListFleetService;
pub use set_availability_service::SetAvailabilityService;
pub use update_driver_profile_service::UpdateDriverProfileService;
