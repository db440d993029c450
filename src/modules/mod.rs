pub mod account;
pub mod auth;
pub mod catalog;
pub mod driver;
pub mod notification;
pub mod order;
pub mod payment;
pub mod vendor;
