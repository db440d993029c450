use std::sync::Arc;

use crate::payment::application::ports::incoming::use_cases::{
    ConfirmPaymentUseCase, GetPaymentUseCase,
};

/// Payment use cases wired into the application state.
#[derive(Clone)]
pub struct PaymentUseCases {
    pub confirm: Arc<dyn ConfirmPaymentUseCase>,
    pub get: Arc<dyn GetPaymentUseCase>,
}
