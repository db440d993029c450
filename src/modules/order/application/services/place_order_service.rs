use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::application::ports::outgoing::{ProductRepository, ProductRepositoryError};
use crate::notification::application::domain::entities::NotificationKind;
use crate::notification::application::ports::outgoing::{NotificationDraft, NotificationPublisher};
use crate::order::application::ports::incoming::use_cases::{
    PlaceOrderCommand, PlaceOrderError, PlaceOrderUseCase,
};
use crate::order::application::ports::outgoing::{
    NewOrderData, NewOrderItem, OrderRepository, OrderRepositoryError, OrderWithItems,
};
use crate::vendor::application::ports::outgoing::{VendorRepository, VendorRepositoryError};

pub struct PlaceOrderService<O: OrderRepository, P: ProductRepository, V: VendorRepository> {
    order_repository: O,
    product_repository: P,
    vendor_repository: V,
    publisher: Arc<dyn NotificationPublisher>,
}

impl<O: OrderRepository, P: ProductRepository, V: VendorRepository> PlaceOrderService<O, P, V> {
    pub fn new(
        order_repository: O,
        product_repository: P,
        vendor_repository: V,
        publisher: Arc<dyn NotificationPublisher>,
    ) -> Self {
        Self {
            order_repository,
            product_repository,
            vendor_repository,
            publisher,
        }
    }
}

#[async_trait]
impl<O: OrderRepository, P: ProductRepository, V: VendorRepository> PlaceOrderUseCase
    for PlaceOrderService<O, P, V>
{
    async fn execute(
        &self,
        customer_id: Uuid,
        command: PlaceOrderCommand,
    ) -> Result<OrderWithItems, PlaceOrderError> {
        let vendor = self
            .vendor_repository
            .find_by_id(command.vendor_id())
            .await
            .map_err(|e| match e {
                VendorRepositoryError::NotFound => PlaceOrderError::VendorNotFound,
                other => PlaceOrderError::RepositoryError(other.to_string()),
            })?;

        let mut items = Vec::with_capacity(command.lines().len());
        let mut total = Decimal::ZERO;

        for line in command.lines() {
            let product = self
                .product_repository
                .find_by_id(line.product_id)
                .await
                .map_err(|e| match e {
                    ProductRepositoryError::NotFound => {
                        PlaceOrderError::ProductNotFound(line.product_id)
                    }
                    other => PlaceOrderError::RepositoryError(other.to_string()),
                })?;

            if product.vendor_id != vendor.id {
                return Err(PlaceOrderError::ForeignProduct(product.id));
            }
            if !product.active {
                return Err(PlaceOrderError::ProductInactive(product.id));
            }
            if line.quantity < product.min_order_qty || line.quantity > product.max_order_qty {
                return Err(PlaceOrderError::QuantityOutOfBounds {
                    product_id: product.id,
                    min: product.min_order_qty,
                    max: product.max_order_qty,
                });
            }
            if line.quantity > product.stock_quantity {
                return Err(PlaceOrderError::InsufficientStock(product.id));
            }

            let line_total = product.unit_price * Decimal::from(line.quantity);
            total += line_total;

            items.push(NewOrderItem {
                product_id: product.id,
                product_name: product.name,
                quantity: line.quantity,
                unit_price: product.unit_price,
                line_total,
            });
        }

        // The repository re-checks stock inside the transaction; the check
        // above only gives a friendly error in the common case.
        let placed = self
            .order_repository
            .create_order(NewOrderData {
                customer_id,
                vendor_id: vendor.id,
                delivery_address: command.delivery_address().to_string(),
                total_amount: total,
                payment_method: command.payment_method(),
                items,
            })
            .await
            .map_err(|e| match e {
                OrderRepositoryError::InsufficientStock(id) => {
                    PlaceOrderError::InsufficientStock(id)
                }
                other => PlaceOrderError::RepositoryError(other.to_string()),
            })?;

        self.publisher
            .publish(NotificationDraft::order_event(
                vendor.user_id,
                NotificationKind::OrderPlaced,
                placed.order.id,
                "New order",
                format!("New order worth {} placed", placed.order.total_amount),
            ))
            .await;

        Ok(placed)
    }
}
