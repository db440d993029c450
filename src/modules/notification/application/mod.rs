pub mod domain;
pub mod notification_use_cases;
pub mod ports;
pub mod services;
