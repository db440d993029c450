use rust_decimal::Decimal;

use crate::catalog::application::domain::entities::FuelType;
use crate::catalog::application::ports::outgoing::ProductData;

/// Validated product payload shared by create and update.
#[derive(Debug, Clone)]
pub struct ProductCommand {
    data: ProductData,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductCommandError {
    #[error("Product name cannot be empty")]
    EmptyName,

    #[error("Product name cannot exceed 120 characters")]
    NameTooLong,

    #[error("Unit price must be greater than zero")]
    NonPositivePrice,

    #[error("Stock quantity cannot be negative")]
    NegativeStock,

    #[error("Minimum order quantity must be at least 1")]
    MinBelowOne,

    #[error("Maximum order quantity cannot be below the minimum")]
    MaxBelowMin,
}

impl ProductCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        fuel_type: FuelType,
        unit_price: Decimal,
        stock_quantity: i32,
        min_order_qty: i32,
        max_order_qty: i32,
        active: bool,
    ) -> Result<Self, ProductCommandError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ProductCommandError::EmptyName);
        }
        if name.len() > 120 {
            return Err(ProductCommandError::NameTooLong);
        }
        if unit_price <= Decimal::ZERO {
            return Err(ProductCommandError::NonPositivePrice);
        }
        if stock_quantity < 0 {
            return Err(ProductCommandError::NegativeStock);
        }
        if min_order_qty < 1 {
            return Err(ProductCommandError::MinBelowOne);
        }
        if max_order_qty < min_order_qty {
            return Err(ProductCommandError::MaxBelowMin);
        }

        Ok(Self {
            data: ProductData {
                name,
                fuel_type,
                unit_price,
                stock_quantity,
                min_order_qty,
                max_order_qty,
                active,
            },
        })
    }

    pub fn into_data(self) -> ProductData {
        self.data
    }
}
