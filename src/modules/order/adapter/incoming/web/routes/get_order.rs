use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::order::application::ports::incoming::use_cases::GetOrderError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::place_order::OrderDetailView;

/// Fetch one order with its items
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    tag = "order",
    params(("order_id" = Uuid, Path, description = "Order id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Order with items", body = inline(SuccessResponse<OrderDetailView>)),
        (status = 403, description = "Order is not visible to this account", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
    )
)]
#[get("/api/orders/{order_id}")]
pub async fn get_order_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    match data
        .order_use_cases
        .get
        .execute(user.user_id, user.role, order_id)
        .await
    {
        Ok(found) => ApiResponse::success(OrderDetailView::from(found)),

        Err(GetOrderError::NotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }

        Err(GetOrderError::Forbidden) => {
            ApiResponse::forbidden("ORDER_NOT_VISIBLE", "Order is not visible to this account")
        }

        Err(GetOrderError::RepositoryError(ref e)) => {
            error!(error = %e, "Order fetch failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::order::application::domain::OrderStatus;
    use crate::order::application::ports::incoming::use_cases::GetOrderUseCase;
    use crate::order::application::ports::outgoing::{
        OrderItemRecord, OrderRecord, OrderWithItems,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::token_provider;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal::Decimal;

    struct MockGetOrder {
        result: Result<(), GetOrderError>,
    }

    #[async_trait]
    impl GetOrderUseCase for MockGetOrder {
        async fn execute(
            &self,
            user_id: Uuid,
            _role: UserRole,
            order_id: Uuid,
        ) -> Result<OrderWithItems, GetOrderError> {
            self.result.clone()?;
            Ok(OrderWithItems {
                order: OrderRecord {
                    id: order_id,
                    customer_id: user_id,
                    vendor_id: Uuid::new_v4(),
                    driver_id: None,
                    status: OrderStatus::Pending,
                    delivery_address: "14 Wharf Rd".to_string(),
                    total_amount: Decimal::new(1_790_000, 2),
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                },
                items: vec![OrderItemRecord {
                    id: Uuid::new_v4(),
                    order_id,
                    product_id: Uuid::new_v4(),
                    product_name: "Diesel AGO".to_string(),
                    quantity: 20,
                    unit_price: Decimal::new(89_500, 2),
                    line_total: Decimal::new(1_790_000, 2),
                }],
            })
        }
    }

    #[actix_web::test]
    async fn test_get_order_with_items() {
        let app_state = TestAppStateBuilder::default()
            .with_get_order(MockGetOrder { result: Ok(()) })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider(UserRole::Customer))
                .service(get_order_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/orders/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["items"][0]["product_name"], "Diesel AGO");
    }

    #[actix_web::test]
    async fn test_get_order_hidden_from_strangers() {
        let app_state = TestAppStateBuilder::default()
            .with_get_order(MockGetOrder {
                result: Err(GetOrderError::Forbidden),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider(UserRole::Customer))
                .service(get_order_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/orders/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ORDER_NOT_VISIBLE");
    }
}
