pub mod confirm_payment;
pub mod get_payment;

pub use confirm_payment::{ConfirmPaymentError, ConfirmPaymentUseCase};
pub use get_payment::{GetPaymentError, GetPaymentUseCase};
