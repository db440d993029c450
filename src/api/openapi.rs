use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LoginUserInfo, LogoutRequestDto, LogoutResponseBody,
    RefreshTokenRequestDto, RefreshTokenResponseBody, RegisterUserDto, RegisterUserResponse,
    RegisteredUser, UserProfileResponse,
};

// Vendor
use crate::vendor::adapter::incoming::web::routes::{
    UpdateVendorProfileDto, VendorProfileView, VendorSummaryView,
};

// Driver
use crate::driver::adapter::incoming::web::routes::{
    DriverProfileView, SetAvailabilityDto, UpdateDriverProfileDto,
};

// Account
use crate::account::adapter::incoming::web::routes::{
    DeleteUsersDto, ModerateUserDto, UserAdminView, UserPageView,
};

// Catalog
use crate::catalog::adapter::incoming::web::routes::{
    CreateProductDto, ProductView, UpdateProductDto,
};

// Notification
use crate::notification::adapter::incoming::web::routes::NotificationView;

// Order
use crate::order::adapter::incoming::web::routes::{
    AdvanceOrderStatusDto, AssignDriverDto, OrderDetailView, OrderItemDto, OrderItemView,
    OrderView, PlaceOrderDto, ReviewOrderDto, ReviewedView,
};

// Payment
use crate::payment::adapter::incoming::web::routes::{ConfirmPaymentDto, PaymentView};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FuelFlow API",
        version = "1.0.0",
        description = "API documentation for the FuelFlow fuel delivery marketplace",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::fetch_profile_handler,

        // Vendor endpoints
        crate::vendor::adapter::incoming::web::routes::get_vendors_handler,
        crate::vendor::adapter::incoming::web::routes::get_vendor_profile_handler,
        crate::vendor::adapter::incoming::web::routes::update_vendor_profile_handler,
        crate::vendor::adapter::incoming::web::routes::upload_logo_handler,

        // Driver endpoints
        crate::driver::adapter::incoming::web::routes::get_driver_profile_handler,
        crate::driver::adapter::incoming::web::routes::update_driver_profile_handler,
        crate::driver::adapter::incoming::web::routes::set_availability_handler,
        crate::driver::adapter::incoming::web::routes::link_driver_handler,
        crate::driver::adapter::incoming::web::routes::get_fleet_handler,

        // Account moderation endpoints
        crate::account::adapter::incoming::web::routes::get_users_handler,
        crate::account::adapter::incoming::web::routes::moderate_user_handler,
        crate::account::adapter::incoming::web::routes::delete_users_handler,

        // Catalog endpoints
        crate::catalog::adapter::incoming::web::routes::get_vendor_products_handler,
        crate::catalog::adapter::incoming::web::routes::create_product_handler,
        crate::catalog::adapter::incoming::web::routes::update_product_handler,
        crate::catalog::adapter::incoming::web::routes::delete_product_handler,

        // Order endpoints
        crate::order::adapter::incoming::web::routes::place_order_handler,
        crate::order::adapter::incoming::web::routes::get_orders_handler,
        crate::order::adapter::incoming::web::routes::get_order_handler,
        crate::order::adapter::incoming::web::routes::accept_order_handler,
        crate::order::adapter::incoming::web::routes::assign_driver_handler,
        crate::order::adapter::incoming::web::routes::advance_order_status_handler,
        crate::order::adapter::incoming::web::routes::deliver_order_handler,
        crate::order::adapter::incoming::web::routes::cancel_order_handler,
        crate::order::adapter::incoming::web::routes::review_order_handler,

        // Payment endpoints
        crate::payment::adapter::incoming::web::routes::confirm_payment_handler,
        crate::payment::adapter::incoming::web::routes::get_payment_handler,

        // Notification endpoints
        crate::notification::adapter::incoming::web::routes::get_notifications_handler,
        crate::notification::adapter::incoming::web::routes::mark_notification_read_handler,
        crate::notification::adapter::incoming::web::routes::stream_notifications_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<OrderDetailView>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterUserDto,
            RegisterUserResponse,
            RegisteredUser,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            LogoutRequestDto,
            LogoutResponseBody,
            RefreshTokenRequestDto,
            RefreshTokenResponseBody,
            UserProfileResponse,

            // Vendor DTOs
            VendorSummaryView,
            VendorProfileView,
            UpdateVendorProfileDto,

            // Driver DTOs
            DriverProfileView,
            UpdateDriverProfileDto,
            SetAvailabilityDto,

            // Account DTOs
            UserAdminView,
            UserPageView,
            ModerateUserDto,
            DeleteUsersDto,

            // Catalog DTOs
            ProductView,
            CreateProductDto,
            UpdateProductDto,

            // Order DTOs
            PlaceOrderDto,
            OrderItemDto,
            OrderView,
            OrderItemView,
            OrderDetailView,
            AssignDriverDto,
            AdvanceOrderStatusDto,
            ReviewOrderDto,
            ReviewedView,

            // Payment DTOs
            ConfirmPaymentDto,
            PaymentView,

            // Notification DTOs
            NotificationView
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "vendor", description = "Vendor profile and directory endpoints"),
        (name = "driver", description = "Driver profile and fleet endpoints"),
        (name = "account", description = "Admin account moderation endpoints"),
        (name = "catalog", description = "Fuel product catalog endpoints"),
        (name = "order", description = "Order lifecycle endpoints"),
        (name = "payment", description = "Payment endpoints"),
        (name = "notification", description = "Notification endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
