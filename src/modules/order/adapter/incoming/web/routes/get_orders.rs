use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::order::application::ports::incoming::use_cases::ListOrdersError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

use super::place_order::OrderView;

/// List the caller's orders
///
/// Customers see the orders they placed, vendors the orders for their
/// shop, drivers their assignments.
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "order",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Orders, newest first", body = inline(SuccessResponse<Vec<OrderView>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "No order listing for this role", body = ErrorResponse),
        (status = 404, description = "No profile for this account", body = ErrorResponse),
    )
)]
#[get("/api/orders")]
pub async fn get_orders_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .order_use_cases
        .list
        .execute(user.user_id, user.role)
        .await
    {
        Ok(orders) => ApiResponse::success(
            orders
                .into_iter()
                .map(OrderView::from)
                .collect::<Vec<_>>(),
        ),

        Err(ListOrdersError::ProfileNotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "No profile for this account")
        }

        Err(ListOrdersError::UnsupportedRole) => {
            ApiResponse::forbidden("UNSUPPORTED_ROLE", "This role has no order listing")
        }

        Err(ListOrdersError::RepositoryError(ref e)) => {
            error!(error = %e, "Order listing failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::order::application::domain::OrderStatus;
    use crate::order::application::ports::incoming::use_cases::ListOrdersUseCase;
    use crate::order::application::ports::outgoing::OrderRecord;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::token_provider;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    struct MockListOrders;

    #[async_trait]
    impl ListOrdersUseCase for MockListOrders {
        async fn execute(
            &self,
            user_id: Uuid,
            role: UserRole,
        ) -> Result<Vec<OrderRecord>, ListOrdersError> {
            if role == UserRole::Admin {
                return Err(ListOrdersError::UnsupportedRole);
            }
            Ok(vec![OrderRecord {
                id: Uuid::new_v4(),
                customer_id: user_id,
                vendor_id: Uuid::new_v4(),
                driver_id: None,
                status: OrderStatus::Pending,
                delivery_address: "14 Wharf Rd".to_string(),
                total_amount: Decimal::new(1_790_000, 2),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }])
        }
    }

    #[actix_web::test]
    async fn test_get_orders_for_customer() {
        let app_state = TestAppStateBuilder::default()
            .with_list_orders(MockListOrders)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider(UserRole::Customer))
                .service(get_orders_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/orders")
            .insert_header(("Authorization", "Bearer token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_get_orders_rejects_admin() {
        let app_state = TestAppStateBuilder::default()
            .with_list_orders(MockListOrders)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider(UserRole::Admin))
                .service(get_orders_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/orders")
            .insert_header(("Authorization", "Bearer token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }
}
