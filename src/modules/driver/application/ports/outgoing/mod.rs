pub mod driver_repository;

pub use driver_repository::{
    DriverProfile, DriverRepository, DriverRepositoryError, UpdateDriverProfileData,
};
