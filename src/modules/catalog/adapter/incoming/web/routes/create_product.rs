use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::VendorUser;
use crate::catalog::application::domain::entities::FuelType;
use crate::catalog::application::ports::incoming::use_cases::{
    CreateProductError, ProductCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use tracing::{error, info};
use utoipa::ToSchema;

use super::get_vendor_products::ProductView;

#[derive(Deserialize, ToSchema)]
pub struct CreateProductDto {
    #[schema(example = "Diesel AGO")]
    pub name: String,

    /// petrol, diesel, kerosene or lpg
    pub fuel_type: FuelType,

    /// Price per litre, decimal string
    #[schema(example = "895.00")]
    pub unit_price: String,

    /// Litres in stock
    pub stock_quantity: i32,

    /// Smallest order, litres
    #[schema(example = 10)]
    pub min_order_qty: i32,

    /// Largest order, litres
    #[schema(example = 500)]
    pub max_order_qty: i32,
}

pub(super) fn parse_command(
    name: String,
    fuel_type: FuelType,
    unit_price: &str,
    stock_quantity: i32,
    min_order_qty: i32,
    max_order_qty: i32,
    active: bool,
) -> Result<ProductCommand, String> {
    let unit_price =
        Decimal::from_str(unit_price).map_err(|_| "Unit price is not a valid decimal".to_string())?;

    ProductCommand::new(
        name,
        fuel_type,
        unit_price,
        stock_quantity,
        min_order_qty,
        max_order_qty,
        active,
    )
    .map_err(|e| e.to_string())
}

/// Add a product to the caller's catalog
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "catalog",
    request_body = CreateProductDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Product created", body = inline(SuccessResponse<ProductView>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Vendor role required", body = ErrorResponse),
        (status = 404, description = "Vendor profile not found", body = ErrorResponse),
    )
)]
#[post("/api/products")]
pub async fn create_product_handler(
    vendor: VendorUser,
    req: web::Json<CreateProductDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match parse_command(
        dto.name,
        dto.fuel_type,
        &dto.unit_price,
        dto.stock_quantity,
        dto.min_order_qty,
        dto.max_order_qty,
        true,
    ) {
        Ok(command) => command,
        Err(message) => return ApiResponse::bad_request("VALIDATION_ERROR", &message),
    };

    match data
        .catalog_use_cases
        .create_product
        .execute(vendor.user_id, command)
        .await
    {
        Ok(product) => {
            info!(user_id = %vendor.user_id, product_id = %product.id, "Product created");
            ApiResponse::created(ProductView::from(product))
        }

        Err(CreateProductError::VendorNotFound) => {
            ApiResponse::not_found("VENDOR_NOT_FOUND", "Vendor profile not found")
        }

        Err(CreateProductError::RepositoryError(ref e)) => {
            error!(error = %e, "Product creation failed");
            ApiResponse::internal_error()
        }
    }
}
