use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::VendorUser;
use crate::order::application::ports::incoming::use_cases::AcceptOrderError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::place_order::OrderView;

/// Accept a pending order
#[utoipa::path(
    patch,
    path = "/api/orders/{order_id}/accept",
    tag = "order",
    params(("order_id" = Uuid, Path, description = "Order id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Accepted order", body = inline(SuccessResponse<OrderView>)),
        (status = 403, description = "Vendor role required or foreign order", body = ErrorResponse),
        (status = 404, description = "Order or vendor profile not found", body = ErrorResponse),
        (status = 409, description = "Order is not pending", body = ErrorResponse),
    )
)]
#[patch("/api/orders/{order_id}/accept")]
pub async fn accept_order_handler(
    vendor: VendorUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    match data
        .order_use_cases
        .accept
        .execute(vendor.user_id, order_id)
        .await
    {
        Ok(order) => {
            info!(order_id = %order.id, "Order accepted");
            ApiResponse::success(OrderView::from(order))
        }

        Err(AcceptOrderError::OrderNotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }

        Err(AcceptOrderError::VendorNotFound) => {
            ApiResponse::not_found("VENDOR_NOT_FOUND", "Vendor profile not found")
        }

        Err(AcceptOrderError::NotOwner) => {
            ApiResponse::forbidden("NOT_ORDER_VENDOR", "Order belongs to another vendor")
        }

        Err(e @ AcceptOrderError::InvalidTransition { .. }) => {
            ApiResponse::conflict("INVALID_STATUS_TRANSITION", &e.to_string())
        }

        Err(AcceptOrderError::RepositoryError(ref e)) => {
            error!(error = %e, "Order acceptance failed");
            ApiResponse::internal_error()
        }
    }
}
