use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::VendorUser;
use crate::catalog::application::domain::entities::FuelType;
use crate::catalog::application::ports::incoming::use_cases::UpdateProductError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use super::create_product::parse_command;
use super::get_vendor_products::ProductView;

#[derive(Deserialize, ToSchema)]
pub struct UpdateProductDto {
    pub name: String,

    /// petrol, diesel, kerosene or lpg
    pub fuel_type: FuelType,

    /// Price per litre, decimal string
    #[schema(example = "895.00")]
    pub unit_price: String,

    pub stock_quantity: i32,

    pub min_order_qty: i32,

    pub max_order_qty: i32,

    /// Clearing this hides the product from the public catalog
    pub active: bool,
}

/// Update one of the caller's products
#[utoipa::path(
    put,
    path = "/api/products/{product_id}",
    tag = "catalog",
    params(("product_id" = String, Path, description = "Product ID (UUID)")),
    request_body = UpdateProductDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product updated", body = inline(SuccessResponse<ProductView>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Vendor role required or foreign product", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
#[put("/api/products/{product_id}")]
pub async fn update_product_handler(
    vendor: VendorUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateProductDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();
    let dto = req.into_inner();

    let command = match parse_command(
        dto.name,
        dto.fuel_type,
        &dto.unit_price,
        dto.stock_quantity,
        dto.min_order_qty,
        dto.max_order_qty,
        dto.active,
    ) {
        Ok(command) => command,
        Err(message) => return ApiResponse::bad_request("VALIDATION_ERROR", &message),
    };

    match data
        .catalog_use_cases
        .update_product
        .execute(vendor.user_id, product_id, command)
        .await
    {
        Ok(product) => {
            info!(user_id = %vendor.user_id, product_id = %product_id, "Product updated");
            ApiResponse::success(ProductView::from(product))
        }

        Err(UpdateProductError::VendorNotFound) => {
            ApiResponse::not_found("VENDOR_NOT_FOUND", "Vendor profile not found")
        }

        Err(UpdateProductError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }

        Err(UpdateProductError::NotOwner) => {
            ApiResponse::forbidden("NOT_PRODUCT_OWNER", "Product belongs to another vendor")
        }

        Err(UpdateProductError::RepositoryError(ref e)) => {
            error!(error = %e, "Product update failed");
            ApiResponse::internal_error()
        }
    }
}
