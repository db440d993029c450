pub mod domain;
pub mod driver_use_cases;
pub mod ports;
pub mod services;

pub use driver_use_cases::DriverUseCases;
