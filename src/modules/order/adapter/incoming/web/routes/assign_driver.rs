use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::VendorUser;
use crate::order::application::ports::incoming::use_cases::AssignDriverError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use super::place_order::OrderView;

#[derive(Deserialize, ToSchema)]
pub struct AssignDriverDto {
    pub driver_id: Uuid,
}

/// Assign a fleet driver to an accepted order
#[utoipa::path(
    patch,
    path = "/api/orders/{order_id}/assign",
    tag = "order",
    params(("order_id" = Uuid, Path, description = "Order id")),
    request_body = AssignDriverDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Assigned order", body = inline(SuccessResponse<OrderView>)),
        (status = 403, description = "Vendor role required or foreign order", body = ErrorResponse),
        (status = 404, description = "Order, vendor or driver not found", body = ErrorResponse),
        (status = 409, description = "Driver unavailable, outside the fleet, or order not accepted", body = ErrorResponse),
    )
)]
#[patch("/api/orders/{order_id}/assign")]
pub async fn assign_driver_handler(
    vendor: VendorUser,
    path: web::Path<Uuid>,
    req: web::Json<AssignDriverDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();
    let driver_id = req.into_inner().driver_id;

    match data
        .order_use_cases
        .assign
        .execute(vendor.user_id, order_id, driver_id)
        .await
    {
        Ok(order) => {
            info!(order_id = %order.id, driver_id = %driver_id, "Driver assigned");
            ApiResponse::success(OrderView::from(order))
        }

        Err(AssignDriverError::OrderNotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }

        Err(AssignDriverError::VendorNotFound) => {
            ApiResponse::not_found("VENDOR_NOT_FOUND", "Vendor profile not found")
        }

        Err(AssignDriverError::DriverNotFound) => {
            ApiResponse::not_found("DRIVER_NOT_FOUND", "Driver not found")
        }

        Err(AssignDriverError::NotOwner) => {
            ApiResponse::forbidden("NOT_ORDER_VENDOR", "Order belongs to another vendor")
        }

        Err(AssignDriverError::DriverNotInFleet) => {
            ApiResponse::conflict("DRIVER_NOT_IN_FLEET", "Driver is not in your fleet")
        }

        Err(AssignDriverError::DriverUnavailable) => {
            ApiResponse::conflict("DRIVER_UNAVAILABLE", "Driver is not available")
        }

        Err(e @ AssignDriverError::InvalidTransition { .. }) => {
            ApiResponse::conflict("INVALID_STATUS_TRANSITION", &e.to_string())
        }

        Err(AssignDriverError::RepositoryError(ref e)) => {
            error!(error = %e, "Driver assignment failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::order::application::domain::OrderStatus;
    use crate::order::application::ports::incoming::use_cases::AssignDriverUseCase;
    use crate::order::application::ports::outgoing::OrderRecord;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::token_provider;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal::Decimal;

    struct MockAssignDriver {
        result: Result<(), AssignDriverError>,
    }

    #[async_trait]
    impl AssignDriverUseCase for MockAssignDriver {
        async fn execute(
            &self,
            _vendor_user_id: Uuid,
            order_id: Uuid,
            driver_id: Uuid,
        ) -> Result<OrderRecord, AssignDriverError> {
            self.result.clone()?;
            Ok(OrderRecord {
                id: order_id,
                customer_id: Uuid::new_v4(),
                vendor_id: Uuid::new_v4(),
                driver_id: Some(driver_id),
                status: OrderStatus::Assigned,
                delivery_address: "14 Wharf Rd".to_string(),
                total_amount: Decimal::new(1_790_000, 2),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }
    }

    async fn call(result: Result<(), AssignDriverError>) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_assign_driver(MockAssignDriver { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider(UserRole::Vendor))
                .service(assign_driver_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/orders/{}/assign", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer token"))
            .set_json(serde_json::json!({ "driver_id": Uuid::new_v4() }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_assign_driver_success() {
        let (status, body) = call(Ok(())).await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["status"], "assigned");
        assert!(!body["data"]["driver_id"].is_null());
    }

    #[actix_web::test]
    async fn test_assign_driver_unavailable() {
        let (status, body) = call(Err(AssignDriverError::DriverUnavailable)).await;
        assert_eq!(status, 409);
        assert_eq!(body["error"]["code"], "DRIVER_UNAVAILABLE");
    }

    #[actix_web::test]
    async fn test_assign_driver_outside_fleet() {
        let (status, body) = call(Err(AssignDriverError::DriverNotInFleet)).await;
        assert_eq!(status, 409);
        assert_eq!(body["error"]["code"], "DRIVER_NOT_IN_FLEET");
    }
}
