use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::CustomerUser;
use crate::order::application::ports::incoming::use_cases::{
    OrderLine, PlaceOrderCommand, PlaceOrderError,
};
use crate::order::application::ports::outgoing::{OrderItemRecord, OrderRecord, OrderWithItems};
use crate::payment::application::domain::entities::PaymentMethod;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema)]
pub struct OrderItemDto {
    pub product_id: Uuid,

    /// Litres of fuel for this line.
    #[schema(example = 50)]
    pub quantity: i32,
}

#[derive(Deserialize, ToSchema)]
pub struct PlaceOrderDto {
    pub vendor_id: Uuid,

    #[schema(example = "14 Wharf Rd, Apapa, Lagos")]
    pub delivery_address: String,

    /// card | transfer | cash_on_delivery
    pub payment_method: PaymentMethod,

    pub items: Vec<OrderItemDto>,
}

#[derive(Serialize, ToSchema)]
pub struct OrderView {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vendor_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub status: String,
    pub delivery_address: String,
    #[schema(example = "17900.00")]
    pub total_amount: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<OrderRecord> for OrderView {
    fn from(order: OrderRecord) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            vendor_id: order.vendor_id,
            driver_id: order.driver_id,
            status: order.status.as_str().to_string(),
            delivery_address: order.delivery_address,
            total_amount: order.total_amount.to_string(),
            created_at: order.created_at.to_rfc3339(),
            updated_at: order.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct OrderItemView {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: String,
    pub line_total: String,
}

impl From<OrderItemRecord> for OrderItemView {
    fn from(item: OrderItemRecord) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            product_name: item.product_name,
            quantity: item.quantity,
            unit_price: item.unit_price.to_string(),
            line_total: item.line_total.to_string(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct OrderDetailView {
    #[serde(flatten)]
    pub order: OrderView,
    pub items: Vec<OrderItemView>,
}

impl From<OrderWithItems> for OrderDetailView {
    fn from(found: OrderWithItems) -> Self {
        Self {
            order: found.order.into(),
            items: found.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Place a fuel order
///
/// Stock is reserved when the order is placed; a concurrent shortfall
/// fails the whole order.
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "order",
    request_body = PlaceOrderDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Order placed", body = inline(SuccessResponse<OrderDetailView>)),
        (status = 400, description = "Invalid order payload", body = ErrorResponse),
        (status = 403, description = "Customer role required", body = ErrorResponse),
        (status = 404, description = "Vendor or product not found", body = ErrorResponse),
        (status = 409, description = "Not enough stock", body = ErrorResponse),
        (status = 422, description = "Quantity outside product bounds", body = ErrorResponse),
    )
)]
#[post("/api/orders")]
pub async fn place_order_handler(
    customer: CustomerUser,
    req: web::Json<PlaceOrderDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let lines = dto
        .items
        .into_iter()
        .map(|i| OrderLine {
            product_id: i.product_id,
            quantity: i.quantity,
        })
        .collect();

    let command = match PlaceOrderCommand::new(
        dto.vendor_id,
        dto.delivery_address,
        dto.payment_method,
        lines,
    ) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .order_use_cases
        .place
        .execute(customer.user_id, command)
        .await
    {
        Ok(placed) => {
            info!(order_id = %placed.order.id, customer_id = %customer.user_id, "Order placed");
            ApiResponse::created(OrderDetailView::from(placed))
        }

        Err(PlaceOrderError::VendorNotFound) => {
            ApiResponse::not_found("VENDOR_NOT_FOUND", "Vendor not found")
        }

        Err(e @ PlaceOrderError::ProductNotFound(_)) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", &e.to_string())
        }

        Err(e @ PlaceOrderError::ProductInactive(_)) => {
            ApiResponse::unprocessable("PRODUCT_NOT_AVAILABLE", &e.to_string())
        }

        Err(e @ PlaceOrderError::ForeignProduct(_)) => {
            ApiResponse::unprocessable("FOREIGN_PRODUCT", &e.to_string())
        }

        Err(e @ PlaceOrderError::QuantityOutOfBounds { .. }) => {
            ApiResponse::unprocessable("QUANTITY_OUT_OF_BOUNDS", &e.to_string())
        }

        Err(e @ PlaceOrderError::InsufficientStock(_)) => {
            ApiResponse::conflict("INSUFFICIENT_STOCK", &e.to_string())
        }

        Err(PlaceOrderError::RepositoryError(ref e)) => {
            error!(error = %e, "Order placement failed");
            ApiResponse::internal_error()
        }
    }
}
