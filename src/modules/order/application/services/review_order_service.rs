use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::domain::OrderStatus;
use crate::order::application::ports::incoming::use_cases::{
    ReviewCommand, ReviewOrderError, ReviewOrderUseCase,
};
use crate::order::application::ports::outgoing::{
    OrderRepository, OrderRepositoryError, ReviewData,
};

pub struct ReviewOrderService<O: OrderRepository> {
    order_repository: O,
}

impl<O: OrderRepository> ReviewOrderService<O> {
    pub fn new(order_repository: O) -> Self {
        Self { order_repository }
    }
}

#[async_trait]
impl<O: OrderRepository> ReviewOrderUseCase for ReviewOrderService<O> {
    async fn execute(
        &self,
        customer_id: Uuid,
        order_id: Uuid,
        command: ReviewCommand,
    ) -> Result<(), ReviewOrderError> {
        let order = self
            .order_repository
            .find_by_id(order_id)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::NotFound => ReviewOrderError::OrderNotFound,
                other => ReviewOrderError::RepositoryError(other.to_string()),
            })?;

        if order.customer_id != customer_id {
            return Err(ReviewOrderError::NotOwner);
        }
        if order.status != OrderStatus::Delivered {
            return Err(ReviewOrderError::NotDelivered);
        }

        self.order_repository
            .add_review(ReviewData {
                order_id: order.id,
                customer_id,
                vendor_id: order.vendor_id,
                driver_id: order.driver_id,
                vendor_rating: command.vendor_rating(),
                driver_rating: command.driver_rating(),
                comment: command.comment().map(str::to_string),
            })
            .await
            .map_err(|e| match e {
                OrderRepositoryError::AlreadyReviewed => ReviewOrderError::AlreadyReviewed,
                other => ReviewOrderError::RepositoryError(other.to_string()),
            })
    }
}
