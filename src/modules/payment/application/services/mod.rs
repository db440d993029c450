pub mod confirm_payment_service;
pub mod get_payment_service;

pub use confirm_payment_service::ConfirmPaymentService;
pub use get_payment_service::GetPaymentService;
