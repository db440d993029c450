use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::order::application::domain::OrderStatus;
use crate::payment::application::domain::entities::PaymentMethod;

#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vendor_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub status: OrderStatus,
    pub delivery_address: String,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct OrderItemRecord {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

#[derive(Debug, Clone)]
pub struct OrderWithItems {
    pub order: OrderRecord,
    pub items: Vec<OrderItemRecord>,
}

/// One line of a new order, already validated against product bounds.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

#[derive(Debug, Clone)]
pub struct NewOrderData {
    pub customer_id: Uuid,
    pub vendor_id: Uuid,
    pub delivery_address: String,
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub items: Vec<NewOrderItem>,
}

#[derive(Debug, Clone)]
pub struct ReviewData {
    pub order_id: Uuid,
    pub customer_id: Uuid,
    pub vendor_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub vendor_rating: i32,
    pub driver_rating: Option<i32>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderRepositoryError {
    #[error("Order not found")]
    NotFound,

    #[error("Not enough stock for product {0}")]
    InsufficientStock(Uuid),

    #[error("Driver is not available")]
    DriverUnavailable,

    #[error("Order already reviewed")]
    AlreadyReviewed,

    /// A concurrent writer moved the order out of the status the caller
    /// observed; nothing was written.
    #[error("Order is no longer {}", .0.as_str())]
    StaleStatus(OrderStatus),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Inserts the order, its items and the pending payment row, and
    /// decrements product stock, all in one transaction. A concurrent
    /// stock shortfall rolls the whole order back.
    async fn create_order(&self, data: NewOrderData)
        -> Result<OrderWithItems, OrderRepositoryError>;

    async fn find_by_id(&self, order_id: Uuid) -> Result<OrderRecord, OrderRepositoryError>;

    async fn find_with_items(
        &self,
        order_id: Uuid,
    ) -> Result<OrderWithItems, OrderRepositoryError>;

    /// Status write conditional on the order still holding `from`: the
    /// caller checks the transition against a snapshot, and the write
    /// only lands while that snapshot is still current. Returns
    /// `StaleStatus` when a concurrent writer got there first.
    async fn set_status(
        &self,
        order_id: Uuid,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<OrderRecord, OrderRepositoryError>;

    /// Sets the driver and moves the order to `assigned` while flipping
    /// the driver to `busy`, in one transaction. The flip is conditional
    /// on the driver still being `available`, and the order write on the
    /// order still being `accepted`.
    async fn assign_driver(
        &self,
        order_id: Uuid,
        driver_id: Uuid,
    ) -> Result<OrderRecord, OrderRepositoryError>;

    /// Marks the order delivered and frees the driver; when `settle_cod`
    /// is set the payment row is marked paid in the same transaction.
    /// The order write is conditional on the order still being
    /// `in_transit`.
    async fn deliver(
        &self,
        order_id: Uuid,
        driver_id: Uuid,
        settle_cod: bool,
    ) -> Result<OrderRecord, OrderRepositoryError>;

    /// Cancels the order and restocks its items in one transaction. The
    /// status write is conditional on the order still holding `from`, so
    /// a raced accept-or-assign cannot be overwritten (and stock cannot
    /// be restocked twice).
    async fn cancel(
        &self,
        order_id: Uuid,
        from: OrderStatus,
    ) -> Result<OrderRecord, OrderRepositoryError>;

    async fn list_for_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<OrderRecord>, OrderRepositoryError>;

    async fn list_for_vendor(
        &self,
        vendor_id: Uuid,
    ) -> Result<Vec<OrderRecord>, OrderRepositoryError>;

    async fn list_for_driver(
        &self,
        driver_id: Uuid,
    ) -> Result<Vec<OrderRecord>, OrderRepositoryError>;

    /// Inserts the review and folds the ratings into the vendor (and
    /// optional driver) aggregates in one transaction.
    async fn add_review(&self, data: ReviewData) -> Result<(), OrderRepositoryError>;
}
