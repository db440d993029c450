use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::catalog::application::domain::entities::FuelType;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub name: String,
    pub fuel_type: FuelType,
    pub unit_price: Decimal,
    pub stock_quantity: i32,
    pub min_order_qty: i32,
    pub max_order_qty: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProductData {
    pub name: String,
    pub fuel_type: FuelType,
    pub unit_price: Decimal,
    pub stock_quantity: i32,
    pub min_order_qty: i32,
    pub max_order_qty: i32,
    pub active: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductRepositoryError {
    #[error("Product not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list_active_for_vendor(
        &self,
        vendor_id: Uuid,
    ) -> Result<Vec<Product>, ProductRepositoryError>;

    async fn find_by_id(&self, product_id: Uuid) -> Result<Product, ProductRepositoryError>;

    async fn insert(
        &self,
        vendor_id: Uuid,
        data: ProductData,
    ) -> Result<Product, ProductRepositoryError>;

    async fn update(
        &self,
        product_id: Uuid,
        data: ProductData,
    ) -> Result<Product, ProductRepositoryError>;

    /// Soft removal. The row stays so order items keep their reference.
    async fn deactivate(&self, product_id: Uuid) -> Result<(), ProductRepositoryError>;
}
