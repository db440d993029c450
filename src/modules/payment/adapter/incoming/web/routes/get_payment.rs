use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::payment::application::ports::incoming::use_cases::GetPaymentError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::confirm_payment::PaymentView;

/// Fetch the payment for an order
#[utoipa::path(
    get,
    path = "/api/payments/{order_id}",
    tag = "payment",
    params(("order_id" = Uuid, Path, description = "Order id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Payment record", body = inline(SuccessResponse<PaymentView>)),
        (status = 403, description = "Payment is not visible to this account", body = ErrorResponse),
        (status = 404, description = "Order or payment not found", body = ErrorResponse),
    )
)]
#[get("/api/payments/{order_id}")]
pub async fn get_payment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    match data
        .payment_use_cases
        .get
        .execute(user.user_id, user.role, order_id)
        .await
    {
        Ok(payment) => ApiResponse::success(PaymentView::from(payment)),

        Err(GetPaymentError::OrderNotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }

        Err(GetPaymentError::PaymentNotFound) => {
            ApiResponse::not_found("PAYMENT_NOT_FOUND", "Payment not found")
        }

        Err(GetPaymentError::Forbidden) => ApiResponse::forbidden(
            "PAYMENT_NOT_VISIBLE",
            "Payment is not visible to this account",
        ),

        Err(GetPaymentError::RepositoryError(ref e)) => {
            error!(error = %e, "Payment fetch failed");
            ApiResponse::internal_error()
        }
    }
}
