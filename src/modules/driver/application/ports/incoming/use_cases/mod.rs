pub mod get_driver_profile;
pub mod link_driver;
pub mod list_fleet;
pub mod set_availability;
pub mod update_driver_profile;

pub use get_driver_profile::{GetDriverProfileError, GetDriverProfileUseCase};
pub use link_driver::{LinkDriverError, LinkDriverUseCase};
pub use list_fleet::{ListFleetError, ListFleetUseCase};
pub use set_availability::{SetAvailabilityError, SetAvailabilityUseCase};
pub use update_driver_profile::{
    UpdateDriverProfileCommand, UpdateDriverProfileCommandError, UpdateDriverProfileError,
    UpdateDriverProfileUseCase,
};
