use std::sync::Arc;

use crate::order::application::ports::incoming::use_cases::{
    AcceptOrderUseCase, AdvanceOrderStatusUseCase, AssignDriverUseCase, CancelOrderUseCase,
    DeliverOrderUseCase, GetOrderUseCase, ListOrdersUseCase, PlaceOrderUseCase, ReviewOrderUseCase,
};

/// Order lifecycle use cases wired into the application state.
#[derive(Clone)]
pub struct OrderUseCases {
    pub place: Arc<dyn PlaceOrderUseCase>,
    pub accept: Arc<dyn AcceptOrderUseCase>,
    pub assign: Arc<dyn AssignDriverUseCase>,
    pub advance: Arc<dyn AdvanceOrderStatusUseCase>,
    pub deliver: Arc<dyn DeliverOrderUseCase>,
    pub cancel: Arc<dyn CancelOrderUseCase>,
    pub list: Arc<dyn ListOrdersUseCase>,
    pub get: Arc<dyn GetOrderUseCase>,
    pub review: Arc<dyn ReviewOrderUseCase>,
}
