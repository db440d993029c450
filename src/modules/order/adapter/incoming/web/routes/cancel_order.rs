use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::CustomerUser;
use crate::order::application::ports::incoming::use_cases::CancelOrderError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::place_order::OrderView;

/// Cancel an order
///
/// Allowed while the order is pending or accepted; reserved stock goes
/// back to the vendor's catalog.
#[utoipa::path(
    patch,
    path = "/api/orders/{order_id}/cancel",
    tag = "order",
    params(("order_id" = Uuid, Path, description = "Order id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Cancelled order", body = inline(SuccessResponse<OrderView>)),
        (status = 403, description = "Customer role required or foreign order", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 409, description = "Order can no longer be cancelled", body = ErrorResponse),
    )
)]
#[patch("/api/orders/{order_id}/cancel")]
pub async fn cancel_order_handler(
    customer: CustomerUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    match data
        .order_use_cases
        .cancel
        .execute(customer.user_id, order_id)
        .await
    {
        Ok(order) => {
            info!(order_id = %order.id, "Order cancelled");
            ApiResponse::success(OrderView::from(order))
        }

        Err(CancelOrderError::OrderNotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }

        Err(CancelOrderError::NotOwner) => {
            ApiResponse::forbidden("NOT_ORDER_OWNER", "Order belongs to another customer")
        }

        Err(e @ CancelOrderError::InvalidTransition { .. }) => {
            ApiResponse::conflict("INVALID_STATUS_TRANSITION", &e.to_string())
        }

        Err(CancelOrderError::RepositoryError(ref e)) => {
            error!(error = %e, "Order cancellation failed");
            ApiResponse::internal_error()
        }
    }
}
