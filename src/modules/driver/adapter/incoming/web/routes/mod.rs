mod get_driver_profile;
mod get_fleet;
mod link_driver;
mod set_availability;
mod update_driver_profile;

pub use get_driver_profile::{get_driver_profile_handler, DriverProfileView};
pub use get_driver_profile::__path_get_driver_profile_handler;
pub use get_fleet::get_fleet_handler;
pub use get_fleet::__path_get_fleet_handler;
pub use link_driver::link_driver_handler;
pub use link_driver::__path_link_driver_handler;
pub use set_availability::{set_availability_handler, SetAvailabilityDto};
pub use set_availability::__path_set_availability_handler;
pub use update_driver_profile::{update_driver_profile_handler, UpdateDriverProfileDto};
pub use update_driver_profile::__path_update_driver_profile_handler;
