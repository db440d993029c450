mod confirm_payment;
mod get_payment;

pub use confirm_payment::{confirm_payment_handler, ConfirmPaymentDto, PaymentView};
pub use confirm_payment::__path_confirm_payment_handler;
pub use get_payment::get_payment_handler;
pub use get_payment::__path_get_payment_handler;
