use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::DriverUser;
use crate::order::application::domain::OrderStatus;
use crate::order::application::ports::incoming::use_cases::AdvanceOrderStatusError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use super::place_order::OrderView;

#[derive(Deserialize, ToSchema)]
pub struct AdvanceOrderStatusDto {
    /// picked_up | in_transit
    #[schema(example = "picked_up")]
    pub status: OrderStatus,
}

/// Report delivery progress
///
/// Drivers move their assignment along the delivery path. Completion
/// goes through the deliver endpoint instead, so payment settlement
/// cannot be skipped.
#[utoipa::path(
    patch,
    path = "/api/orders/{order_id}/status",
    tag = "order",
    params(("order_id" = Uuid, Path, description = "Order id")),
    request_body = AdvanceOrderStatusDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated order", body = inline(SuccessResponse<OrderView>)),
        (status = 400, description = "Target status not reachable here", body = ErrorResponse),
        (status = 403, description = "Driver role required or foreign assignment", body = ErrorResponse),
        (status = 404, description = "Order or driver profile not found", body = ErrorResponse),
        (status = 409, description = "Transition not allowed from current status", body = ErrorResponse),
    )
)]
#[patch("/api/orders/{order_id}/status")]
pub async fn advance_order_status_handler(
    driver: DriverUser,
    path: web::Path<Uuid>,
    req: web::Json<AdvanceOrderStatusDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();
    let target = req.into_inner().status;

    match data
        .order_use_cases
        .advance
        .execute(driver.user_id, order_id, target)
        .await
    {
        Ok(order) => {
            info!(order_id = %order.id, status = order.status.as_str(), "Order progressed");
            ApiResponse::success(OrderView::from(order))
        }

        Err(AdvanceOrderStatusError::OrderNotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }

        Err(AdvanceOrderStatusError::DriverNotFound) => {
            ApiResponse::not_found("DRIVER_NOT_FOUND", "Driver profile not found")
        }

        Err(AdvanceOrderStatusError::NotAssignedDriver) => {
            ApiResponse::forbidden("NOT_ASSIGNED_DRIVER", "Order is not assigned to you")
        }

        Err(AdvanceOrderStatusError::UnsupportedTarget) => ApiResponse::bad_request(
            "UNSUPPORTED_TARGET",
            "Drivers can only move orders to picked_up or in_transit",
        ),

        Err(e @ AdvanceOrderStatusError::InvalidTransition { .. }) => {
            ApiResponse::conflict("INVALID_STATUS_TRANSITION", &e.to_string())
        }

        Err(AdvanceOrderStatusError::RepositoryError(ref e)) => {
            error!(error = %e, "Order progress update failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::order::application::ports::incoming::use_cases::AdvanceOrderStatusUseCase;
    use crate::order::application::ports::outgoing::OrderRecord;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::token_provider;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal::Decimal;

    struct MockAdvance {
        result: Result<(), AdvanceOrderStatusError>,
    }

    #[async_trait]
    impl AdvanceOrderStatusUseCase for MockAdvance {
        async fn execute(
            &self,
            _driver_user_id: Uuid,
            order_id: Uuid,
            target: OrderStatus,
        ) -> Result<OrderRecord, AdvanceOrderStatusError> {
            self.result.clone()?;
            Ok(OrderRecord {
                id: order_id,
                customer_id: Uuid::new_v4(),
                vendor_id: Uuid::new_v4(),
                driver_id: Some(Uuid::new_v4()),
                status: target,
                delivery_address: "14 Wharf Rd".to_string(),
                total_amount: Decimal::new(1_790_000, 2),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }
    }

    async fn call(
        result: Result<(), AdvanceOrderStatusError>,
        status: &str,
    ) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_advance_order_status(MockAdvance { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider(UserRole::Driver))
                .service(advance_order_status_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/orders/{}/status", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer token"))
            .set_json(serde_json::json!({ "status": status }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let code = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (code, body)
    }

    #[actix_web::test]
    async fn test_advance_to_picked_up() {
        let (status, body) = call(Ok(()), "picked_up").await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["status"], "picked_up");
    }

    #[actix_web::test]
    async fn test_advance_rejects_unsupported_target() {
        let (status, body) =
            call(Err(AdvanceOrderStatusError::UnsupportedTarget), "delivered").await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_TARGET");
    }

    #[actix_web::test]
    async fn test_advance_rejects_foreign_assignment() {
        let (status, body) =
            call(Err(AdvanceOrderStatusError::NotAssignedDriver), "picked_up").await;
        assert_eq!(status, 403);
        assert_eq!(body["error"]["code"], "NOT_ASSIGNED_DRIVER");
    }
}
