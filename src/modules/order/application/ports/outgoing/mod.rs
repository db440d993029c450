pub mod order_repository;

pub use order_repository::{
    NewOrderData, NewOrderItem, OrderItemRecord, OrderRecord, OrderRepository,
    OrderRepositoryError, OrderWithItems, ReviewData,
};
