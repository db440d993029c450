use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::DriverUser;
use crate::order::application::ports::incoming::use_cases::DeliverOrderError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::place_order::OrderView;

/// Complete a delivery
///
/// Frees the driver, and for cash-on-delivery orders settles the
/// payment in the same transaction.
#[utoipa::path(
    patch,
    path = "/api/orders/{order_id}/deliver",
    tag = "order",
    params(("order_id" = Uuid, Path, description = "Order id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Delivered order", body = inline(SuccessResponse<OrderView>)),
        (status = 403, description = "Driver role required or foreign assignment", body = ErrorResponse),
        (status = 404, description = "Order, driver profile or payment not found", body = ErrorResponse),
        (status = 409, description = "Order is not in transit", body = ErrorResponse),
    )
)]
#[patch("/api/orders/{order_id}/deliver")]
pub async fn deliver_order_handler(
    driver: DriverUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    match data
        .order_use_cases
        .deliver
        .execute(driver.user_id, order_id)
        .await
    {
        Ok(order) => {
            info!(order_id = %order.id, "Order delivered");
            ApiResponse::success(OrderView::from(order))
        }

        Err(DeliverOrderError::OrderNotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }

        Err(DeliverOrderError::DriverNotFound) => {
            ApiResponse::not_found("DRIVER_NOT_FOUND", "Driver profile not found")
        }

        Err(DeliverOrderError::PaymentMissing) => {
            ApiResponse::not_found("PAYMENT_NOT_FOUND", "No payment record for this order")
        }

        Err(DeliverOrderError::NotAssignedDriver) => {
            ApiResponse::forbidden("NOT_ASSIGNED_DRIVER", "Order is not assigned to you")
        }

        Err(e @ DeliverOrderError::InvalidTransition { .. }) => {
            ApiResponse::conflict("INVALID_STATUS_TRANSITION", &e.to_string())
        }

        Err(DeliverOrderError::RepositoryError(ref e)) => {
            error!(error = %e, "Order delivery failed");
            ApiResponse::internal_error()
        }
    }
}
