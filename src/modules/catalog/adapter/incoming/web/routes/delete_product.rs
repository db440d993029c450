use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::VendorUser;
use crate::catalog::application::ports::incoming::use_cases::DeleteProductError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

/// Remove a product from the caller's catalog
///
/// Soft removal: existing order items keep their product reference.
#[utoipa::path(
    delete,
    path = "/api/products/{product_id}",
    tag = "catalog",
    params(("product_id" = String, Path, description = "Product ID (UUID)")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Product removed"),
        (status = 403, description = "Vendor role required or foreign product", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
#[delete("/api/products/{product_id}")]
pub async fn delete_product_handler(
    vendor: VendorUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();

    match data
        .catalog_use_cases
        .delete_product
        .execute(vendor.user_id, product_id)
        .await
    {
        Ok(()) => {
            info!(user_id = %vendor.user_id, product_id = %product_id, "Product removed");
            ApiResponse::no_content()
        }

        Err(DeleteProductError::VendorNotFound) => {
            ApiResponse::not_found("VENDOR_NOT_FOUND", "Vendor profile not found")
        }

        Err(DeleteProductError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }

        Err(DeleteProductError::NotOwner) => {
            ApiResponse::forbidden("NOT_PRODUCT_OWNER", "Product belongs to another vendor")
        }

        Err(DeleteProductError::RepositoryError(ref e)) => {
            error!(error = %e, "Product removal failed");
            ApiResponse::internal_error()
        }
    }
}
