use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::CustomerUser;
use crate::payment::application::ports::incoming::use_cases::ConfirmPaymentError;
use crate::payment::application::ports::outgoing::PaymentRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema)]
pub struct ConfirmPaymentDto {
    /// Reference from the payment processor.
    #[schema(example = "TX-93718842")]
    pub tx_ref: String,
}

#[derive(Serialize, ToSchema)]
pub struct PaymentView {
    pub id: Uuid,
    pub order_id: Uuid,
    pub method: String,
    pub status: String,
    pub tx_ref: Option<String>,
    pub paid_at: Option<String>,
    pub created_at: String,
}

impl From<PaymentRecord> for PaymentView {
    fn from(payment: PaymentRecord) -> Self {
        Self {
            id: payment.id,
            order_id: payment.order_id,
            method: payment.method.as_str().to_string(),
            status: payment.status.as_str().to_string(),
            tx_ref: payment.tx_ref,
            paid_at: payment.paid_at.map(|t| t.to_rfc3339()),
            created_at: payment.created_at.to_rfc3339(),
        }
    }
}

/// Confirm an upfront payment
///
/// For card and transfer payments only; cash on delivery settles when
/// the driver completes the delivery.
#[utoipa::path(
    post,
    path = "/api/payments/{order_id}/confirm",
    tag = "payment",
    params(("order_id" = Uuid, Path, description = "Order id")),
    request_body = ConfirmPaymentDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Settled payment", body = inline(SuccessResponse<PaymentView>)),
        (status = 400, description = "Empty transaction reference", body = ErrorResponse),
        (status = 403, description = "Customer role required or foreign order", body = ErrorResponse),
        (status = 404, description = "Order or payment not found", body = ErrorResponse),
        (status = 409, description = "Cash on delivery, or already settled", body = ErrorResponse),
    )
)]
#[post("/api/payments/{order_id}/confirm")]
pub async fn confirm_payment_handler(
    customer: CustomerUser,
    path: web::Path<Uuid>,
    req: web::Json<ConfirmPaymentDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();
    let tx_ref = req.into_inner().tx_ref;

    match data
        .payment_use_cases
        .confirm
        .execute(customer.user_id, order_id, tx_ref)
        .await
    {
        Ok(payment) => {
            info!(order_id = %order_id, "Payment confirmed");
            ApiResponse::success(PaymentView::from(payment))
        }

        Err(ConfirmPaymentError::OrderNotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }

        Err(ConfirmPaymentError::PaymentNotFound) => {
            ApiResponse::not_found("PAYMENT_NOT_FOUND", "No payment record for this order")
        }

        Err(ConfirmPaymentError::NotOwner) => {
            ApiResponse::forbidden("NOT_ORDER_OWNER", "Order belongs to another customer")
        }

        Err(ConfirmPaymentError::CodNotConfirmable) => ApiResponse::conflict(
            "COD_NOT_CONFIRMABLE",
            "Cash on delivery settles when the driver delivers",
        ),

        Err(ConfirmPaymentError::NotPending) => {
            ApiResponse::conflict("PAYMENT_NOT_PENDING", "Payment has already been settled")
        }

        Err(ConfirmPaymentError::EmptyReference) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Transaction reference cannot be empty")
        }

        Err(ConfirmPaymentError::RepositoryError(ref e)) => {
            error!(error = %e, "Payment confirmation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::payment::application::domain::entities::{PaymentMethod, PaymentStatus};
    use crate::payment::application::ports::incoming::use_cases::ConfirmPaymentUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::token_provider;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;

    struct MockConfirmPayment {
        result: Result<(), ConfirmPaymentError>,
    }

    #[async_trait]
    impl ConfirmPaymentUseCase for MockConfirmPayment {
        async fn execute(
            &self,
            _customer_id: Uuid,
            order_id: Uuid,
            tx_ref: String,
        ) -> Result<PaymentRecord, ConfirmPaymentError> {
            self.result.clone()?;
            Ok(PaymentRecord {
                id: Uuid::new_v4(),
                order_id,
                method: PaymentMethod::Card,
                status: PaymentStatus::Paid,
                tx_ref: Some(tx_ref),
                paid_at: Some(Utc::now()),
                created_at: Utc::now(),
            })
        }
    }

    async fn call(result: Result<(), ConfirmPaymentError>) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_confirm_payment(MockConfirmPayment { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider(UserRole::Customer))
                .service(confirm_payment_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/payments/{}/confirm", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer token"))
            .set_json(serde_json::json!({ "tx_ref": "TX-93718842" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_confirm_payment_success() {
        let (status, body) = call(Ok(())).await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["status"], "paid");
        assert_eq!(body["data"]["tx_ref"], "TX-93718842");
    }

    #[actix_web::test]
    async fn test_confirm_payment_rejects_cod() {
        let (status, body) = call(Err(ConfirmPaymentError::CodNotConfirmable)).await;
        assert_eq!(status, 409);
        assert_eq!(body["error"]["code"], "COD_NOT_CONFIRMABLE");
    }

    #[actix_web::test]
    async fn test_confirm_payment_already_settled() {
        let (status, body) = call(Err(ConfirmPaymentError::NotPending)).await;
        assert_eq!(status, 409);
        assert_eq!(body["error"]["code"], "PAYMENT_NOT_PENDING");
    }
}
