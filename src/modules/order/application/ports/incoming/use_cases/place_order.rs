use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::ports::outgoing::OrderWithItems;
use crate::payment::application::domain::entities::PaymentMethod;

/// One requested line: quantity of one product.
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct PlaceOrderCommand {
    vendor_id: Uuid,
    delivery_address: String,
    payment_method: PaymentMethod,
    lines: Vec<OrderLine>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PlaceOrderCommandError {
    #[error("Delivery address cannot be empty")]
    EmptyAddress,

    #[error("Order needs at least one item")]
    NoItems,

    #[error("Item quantity must be positive")]
    NonPositiveQuantity,

    #[error("Duplicate product in order")]
    DuplicateProduct,
}

impl PlaceOrderCommand {
    pub fn new(
        vendor_id: Uuid,
        delivery_address: String,
        payment_method: PaymentMethod,
        lines: Vec<OrderLine>,
    ) -> Result<Self, PlaceOrderCommandError> {
        let delivery_address = delivery_address.trim().to_string();
        if delivery_address.is_empty() {
            return Err(PlaceOrderCommandError::EmptyAddress);
        }
        if lines.is_empty() {
            return Err(PlaceOrderCommandError::NoItems);
        }
        if lines.iter().any(|l| l.quantity <= 0) {
            return Err(PlaceOrderCommandError::NonPositiveQuantity);
        }

        let mut seen = std::collections::HashSet::new();
        if !lines.iter().all(|l| seen.insert(l.product_id)) {
            return Err(PlaceOrderCommandError::DuplicateProduct);
        }

        Ok(Self {
            vendor_id,
            delivery_address,
            payment_method,
            lines,
        })
    }

    pub fn vendor_id(&self) -> Uuid {
        self.vendor_id
    }

    pub fn delivery_address(&self) -> &str {
        &self.delivery_address
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PlaceOrderError {
    #[error("Vendor not found")]
    VendorNotFound,

    #[error("Product {0} not found")]
    ProductNotFound(Uuid),

    #[error("Product {0} is not available")]
    ProductInactive(Uuid),

    #[error("Product {0} belongs to another vendor")]
    ForeignProduct(Uuid),

    #[error("Quantity for product {product_id} must be between {min} and {max}")]
    QuantityOutOfBounds {
        product_id: Uuid,
        min: i32,
        max: i32,
    },

    #[error("Not enough stock for product {0}")]
    InsufficientStock(Uuid),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(
        &self,
        customer_id: Uuid,
        command: PlaceOrderCommand,
    ) -> Result<OrderWithItems, PlaceOrderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(quantity: i32) -> OrderLine {
        OrderLine {
            product_id: Uuid::new_v4(),
            quantity,
        }
    }

    #[test]
    fn command_rejects_empty_and_duplicate_input() {
        assert!(matches!(
            PlaceOrderCommand::new(Uuid::new_v4(), " ".into(), PaymentMethod::Card, vec![line(1)]),
            Err(PlaceOrderCommandError::EmptyAddress)
        ));
        assert!(matches!(
            PlaceOrderCommand::new(Uuid::new_v4(), "14 Wharf Rd".into(), PaymentMethod::Card, vec![]),
            Err(PlaceOrderCommandError::NoItems)
        ));
        assert!(matches!(
            PlaceOrderCommand::new(
                Uuid::new_v4(),
                "14 Wharf Rd".into(),
                PaymentMethod::Card,
                vec![line(0)]
            ),
            Err(PlaceOrderCommandError::NonPositiveQuantity)
        ));

        let dup = OrderLine {
            product_id: Uuid::new_v4(),
            quantity: 5,
        };
        assert!(matches!(
            PlaceOrderCommand::new(
                Uuid::new_v4(),
                "14 Wharf Rd".into(),
                PaymentMethod::Card,
                vec![dup.clone(), dup]
            ),
            Err(PlaceOrderCommandError::DuplicateProduct)
        ));
    }
}
