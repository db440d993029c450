use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::CustomerUser;
use crate::order::application::ports::incoming::use_cases::{ReviewCommand, ReviewOrderError};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema)]
pub struct ReviewOrderDto {
    /// 1 to 5
    #[schema(example = 5)]
    pub vendor_rating: i32,

    /// 1 to 5; omit when the delivery needs no driver feedback.
    pub driver_rating: Option<i32>,

    #[schema(example = "Prompt delivery, correct volume")]
    pub comment: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ReviewedView {
    pub order_id: Uuid,
}

/// Review a delivered order
///
/// One review per order; the ratings feed the vendor and driver
/// aggregates.
#[utoipa::path(
    post,
    path = "/api/orders/{order_id}/review",
    tag = "order",
    params(("order_id" = Uuid, Path, description = "Order id")),
    request_body = ReviewOrderDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Review recorded", body = inline(SuccessResponse<ReviewedView>)),
        (status = 400, description = "Rating outside 1..5 or oversized comment", body = ErrorResponse),
        (status = 403, description = "Customer role required or foreign order", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 409, description = "Order not delivered yet or already reviewed", body = ErrorResponse),
    )
)]
#[post("/api/orders/{order_id}/review")]
pub async fn review_order_handler(
    customer: CustomerUser,
    path: web::Path<Uuid>,
    req: web::Json<ReviewOrderDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();
    let dto = req.into_inner();

    let command = match ReviewCommand::new(dto.vendor_rating, dto.driver_rating, dto.comment) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .order_use_cases
        .review
        .execute(customer.user_id, order_id, command)
        .await
    {
        Ok(()) => {
            info!(order_id = %order_id, "Order reviewed");
            ApiResponse::created(ReviewedView { order_id })
        }

        Err(ReviewOrderError::OrderNotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }

        Err(ReviewOrderError::NotOwner) => {
            ApiResponse::forbidden("NOT_ORDER_OWNER", "Order belongs to another customer")
        }

        Err(ReviewOrderError::NotDelivered) => {
            ApiResponse::conflict("ORDER_NOT_DELIVERED", "Only delivered orders can be reviewed")
        }

        Err(ReviewOrderError::AlreadyReviewed) => {
            ApiResponse::conflict("ALREADY_REVIEWED", "Order already reviewed")
        }

        Err(ReviewOrderError::RepositoryError(ref e)) => {
            error!(error = %e, "Order review failed");
            ApiResponse::internal_error()
        }
    }
}
