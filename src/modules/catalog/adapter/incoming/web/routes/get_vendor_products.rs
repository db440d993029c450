use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::catalog::application::ports::incoming::use_cases::ListVendorProductsError;
use crate::catalog::application::ports::outgoing::Product;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct ProductView {
    /// Product ID (UUID)
    id: String,

    /// Owning vendor ID (UUID)
    vendor_id: String,

    #[schema(example = "Diesel AGO")]
    name: String,

    /// petrol, diesel, kerosene or lpg
    fuel_type: String,

    /// Price per litre
    #[schema(example = "895.00")]
    unit_price: String,

    /// Litres in stock
    stock_quantity: i32,

    min_order_qty: i32,

    max_order_qty: i32,

    active: bool,
}

impl From<Product> for ProductView {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.to_string(),
            vendor_id: p.vendor_id.to_string(),
            name: p.name,
            fuel_type: p.fuel_type.as_str().to_string(),
            unit_price: p.unit_price.to_string(),
            stock_quantity: p.stock_quantity,
            min_order_qty: p.min_order_qty,
            max_order_qty: p.max_order_qty,
            active: p.active,
        }
    }
}

/// Public catalog of one vendor, active products only
#[utoipa::path(
    get,
    path = "/api/vendors/{vendor_id}/products",
    tag = "catalog",
    params(("vendor_id" = String, Path, description = "Vendor ID (UUID)")),
    responses(
        (status = 200, description = "Active products", body = inline(SuccessResponse<Vec<ProductView>>)),
        (status = 404, description = "Vendor not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/vendors/{vendor_id}/products")]
pub async fn get_vendor_products_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let vendor_id = path.into_inner();

    match data.catalog_use_cases.list_products.execute(vendor_id).await {
        Ok(products) => ApiResponse::success(
            products
                .into_iter()
                .map(ProductView::from)
                .collect::<Vec<_>>(),
        ),

        Err(ListVendorProductsError::VendorNotFound) => {
            ApiResponse::not_found("VENDOR_NOT_FOUND", "Vendor not found")
        }

        Err(ListVendorProductsError::RepositoryError(ref e)) => {
            error!(error = %e, "Product listing failed");
            ApiResponse::internal_error()
        }
    }
}
