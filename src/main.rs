pub mod modules;
pub use modules::account;
pub use modules::auth;
pub use modules::catalog;
pub use modules::driver;
pub use modules::notification;
pub use modules::order;
pub use modules::payment;
pub use modules::vendor;

pub mod api;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::{RedisTokenBlacklist, UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::use_cases::{
    fetch_profile::{FetchProfileUseCase, IFetchProfileUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};

use crate::account::application::AccountUseCases;
use crate::catalog::application::CatalogUseCases;
use crate::driver::application::DriverUseCases;
use crate::notification::application::notification_use_cases::NotificationUseCases;
use crate::order::application::OrderUseCases;
use crate::payment::application::PaymentUseCases;
use crate::vendor::application::vendor_use_cases::VendorUseCases;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub logout_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub fetch_profile_use_case: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    pub vendor_use_cases: VendorUseCases,
    pub driver_use_cases: DriverUseCases,
    pub account_use_cases: AccountUseCases,
    pub catalog_use_cases: CatalogUseCases,
    pub order_use_cases: OrderUseCases,
    pub payment_use_cases: PaymentUseCases,
    pub notification_use_cases: NotificationUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    use crate::account::adapter::outgoing::AccountRepositoryPostgres;
    use crate::account::application::services::{
        DeleteUsersService, ListUsersService, ModerateUserService,
    };
    use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
    use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
    use crate::catalog::adapter::outgoing::ProductRepositoryPostgres;
    use crate::catalog::application::services::{
        CreateProductService, DeleteProductService, ListVendorProductsService,
        UpdateProductService,
    };
    use crate::driver::adapter::outgoing::DriverRepositoryPostgres;
    use crate::driver::application::services::{
        GetDriverProfileService, LinkDriverService, ListFleetService, SetAvailabilityService,
        UpdateDriverProfileService,
    };
    use crate::notification::adapter::outgoing::{NotificationRepositoryPostgres, RealtimeHub};
    use crate::notification::application::ports::outgoing::{
        NotificationPublisher, RealtimeNotifier,
    };
    use crate::notification::application::services::{
        ListNotificationsService, MarkNotificationReadService, NotificationPublisherService,
    };
    use crate::order::adapter::outgoing::OrderRepositoryPostgres;
    use crate::order::application::services::{
        AcceptOrderService, AdvanceOrderStatusService, AssignDriverService, CancelOrderService,
        DeliverOrderService, GetOrderService, ListOrdersService, PlaceOrderService,
        ReviewOrderService,
    };
    use crate::payment::adapter::outgoing::PaymentRepositoryPostgres;
    use crate::payment::application::services::{ConfirmPaymentService, GetPaymentService};
    use crate::vendor::adapter::outgoing::{LocalDiskLogoStorage, VendorRepositoryPostgres};
    use crate::vendor::application::ports::outgoing::LogoStorage;
    use crate::vendor::application::service::{
        GetVendorProfileService, ListVendorsService, UpdateVendorProfileService,
        UploadLogoService,
    };
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Auth
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_blacklist = RedisTokenBlacklist::new(Arc::clone(&redis_arc));
    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::from_env());

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));

    let register_user_use_case =
        RegisterUserUseCase::new(user_repo.clone(), Arc::clone(&password_hasher));
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        Arc::clone(&password_hasher),
        Arc::new(jwt_service.clone()),
    );
    let refresh_token_use_case =
        RefreshTokenUseCase::new(Arc::new(jwt_service.clone()), token_blacklist.clone());
    let logout_use_case =
        LogoutUseCase::new(token_blacklist.clone(), Arc::new(jwt_service.clone()));
    let fetch_profile_use_case = FetchProfileUseCase::new(user_query.clone());

    // Repositories shared across modules
    let vendor_repo = VendorRepositoryPostgres::new(Arc::clone(&db_arc));
    let driver_repo = DriverRepositoryPostgres::new(Arc::clone(&db_arc));
    let product_repo = ProductRepositoryPostgres::new(Arc::clone(&db_arc));
    let order_repo = OrderRepositoryPostgres::new(Arc::clone(&db_arc));
    let payment_repo = PaymentRepositoryPostgres::new(Arc::clone(&db_arc));
    let account_repo = AccountRepositoryPostgres::new(Arc::clone(&db_arc));
    let notification_repo = NotificationRepositoryPostgres::new(Arc::clone(&db_arc));

    // Notifications: persistence plus in-process SSE fan-out
    let realtime: Arc<dyn RealtimeNotifier> = Arc::new(RealtimeHub::new());
    let publisher: Arc<dyn NotificationPublisher> = Arc::new(NotificationPublisherService::new(
        notification_repo.clone(),
        Arc::clone(&realtime),
    ));

    let logo_storage: Arc<dyn LogoStorage> = Arc::new(LocalDiskLogoStorage::from_env());

    let vendor_use_cases = VendorUseCases {
        list: Arc::new(ListVendorsService::new(vendor_repo.clone())),
        get_profile: Arc::new(GetVendorProfileService::new(vendor_repo.clone())),
        update_profile: Arc::new(UpdateVendorProfileService::new(vendor_repo.clone())),
        upload_logo: Arc::new(UploadLogoService::new(vendor_repo.clone(), logo_storage)),
    };

    let driver_use_cases = DriverUseCases {
        get_profile: Arc::new(GetDriverProfileService::new(driver_repo.clone())),
        update_profile: Arc::new(UpdateDriverProfileService::new(driver_repo.clone())),
        set_availability: Arc::new(SetAvailabilityService::new(driver_repo.clone())),
        link_driver: Arc::new(LinkDriverService::new(
            driver_repo.clone(),
            vendor_repo.clone(),
        )),
        list_fleet: Arc::new(ListFleetService::new(
            driver_repo.clone(),
            vendor_repo.clone(),
        )),
    };

    let account_use_cases = AccountUseCases {
        list_users: Arc::new(ListUsersService::new(account_repo.clone())),
        moderate_user: Arc::new(ModerateUserService::new(
            account_repo.clone(),
            Arc::clone(&publisher),
        )),
        delete_users: Arc::new(DeleteUsersService::new(account_repo)),
    };

    let catalog_use_cases = CatalogUseCases {
        list_products: Arc::new(ListVendorProductsService::new(
            product_repo.clone(),
            vendor_repo.clone(),
        )),
        create_product: Arc::new(CreateProductService::new(
            product_repo.clone(),
            vendor_repo.clone(),
        )),
        update_product: Arc::new(UpdateProductService::new(
            product_repo.clone(),
            vendor_repo.clone(),
        )),
        delete_product: Arc::new(DeleteProductService::new(
            product_repo.clone(),
            vendor_repo.clone(),
        )),
    };

    let order_use_cases = OrderUseCases {
        place: Arc::new(PlaceOrderService::new(
            order_repo.clone(),
            product_repo.clone(),
            vendor_repo.clone(),
            Arc::clone(&publisher),
        )),
        accept: Arc::new(AcceptOrderService::new(
            order_repo.clone(),
            vendor_repo.clone(),
            Arc::clone(&publisher),
        )),
        assign: Arc::new(AssignDriverService::new(
            order_repo.clone(),
            vendor_repo.clone(),
            driver_repo.clone(),
            Arc::clone(&publisher),
        )),
        advance: Arc::new(AdvanceOrderStatusService::new(
            order_repo.clone(),
            driver_repo.clone(),
            Arc::clone(&publisher),
        )),
        deliver: Arc::new(DeliverOrderService::new(
            order_repo.clone(),
            driver_repo.clone(),
            payment_repo.clone(),
            vendor_repo.clone(),
            Arc::clone(&publisher),
        )),
        cancel: Arc::new(CancelOrderService::new(
            order_repo.clone(),
            vendor_repo.clone(),
            Arc::clone(&publisher),
        )),
        list: Arc::new(ListOrdersService::new(
            order_repo.clone(),
            vendor_repo.clone(),
            driver_repo.clone(),
        )),
        get: Arc::new(GetOrderService::new(
            order_repo.clone(),
            vendor_repo.clone(),
            driver_repo.clone(),
        )),
        review: Arc::new(ReviewOrderService::new(order_repo.clone())),
    };

    let payment_use_cases = PaymentUseCases {
        confirm: Arc::new(ConfirmPaymentService::new(
            payment_repo.clone(),
            order_repo.clone(),
            vendor_repo.clone(),
            Arc::clone(&publisher),
        )),
        get: Arc::new(GetPaymentService::new(
            payment_repo,
            order_repo,
            vendor_repo,
            driver_repo,
        )),
    };

    let notification_use_cases = NotificationUseCases {
        list: Arc::new(ListNotificationsService::new(notification_repo.clone())),
        mark_read: Arc::new(MarkNotificationReadService::new(notification_repo)),
        realtime,
    };

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        logout_use_case: Arc::new(logout_use_case),
        fetch_profile_use_case: Arc::new(fetch_profile_use_case),
        vendor_use_cases,
        driver_use_cases,
        account_use_cases,
        catalog_use_cases,
        order_use_cases,
        payment_use_cases,
        notification_use_cases,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);
    let openapi = crate::api::openapi::ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(crate::shared::api::custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_profile_handler);
    // Vendor
    cfg.service(crate::vendor::adapter::incoming::web::routes::get_vendors_handler);
    cfg.service(crate::vendor::adapter::incoming::web::routes::get_vendor_profile_handler);
    cfg.service(crate::vendor::adapter::incoming::web::routes::update_vendor_profile_handler);
    cfg.service(crate::vendor::adapter::incoming::web::routes::upload_logo_handler);
    // Driver
    cfg.service(crate::driver::adapter::incoming::web::routes::get_driver_profile_handler);
    cfg.service(crate::driver::adapter::incoming::web::routes::update_driver_profile_handler);
    cfg.service(crate::driver::adapter::incoming::web::routes::set_availability_handler);
    cfg.service(crate::driver::adapter::incoming::web::routes::link_driver_handler);
    cfg.service(crate::driver::adapter::incoming::web::routes::get_fleet_handler);
    // Account moderation
    cfg.service(crate::account::adapter::incoming::web::routes::get_users_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::moderate_user_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::delete_users_handler);
    // Catalog
    cfg.service(crate::catalog::adapter::incoming::web::routes::get_vendor_products_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::create_product_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::update_product_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::delete_product_handler);
    // Order
    cfg.service(crate::order::adapter::incoming::web::routes::place_order_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::get_orders_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::get_order_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::accept_order_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::assign_driver_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::advance_order_status_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::deliver_order_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::cancel_order_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::review_order_handler);
    // Payment
    cfg.service(crate::payment::adapter::incoming::web::routes::confirm_payment_handler);
    cfg.service(crate::payment::adapter::incoming::web::routes::get_payment_handler);
    // Notification
    cfg.service(crate::notification::adapter::incoming::web::routes::get_notifications_handler);
    cfg.service(crate::notification::adapter::incoming::web::routes::mark_notification_read_handler);
    cfg.service(crate::notification::adapter::incoming::web::routes::stream_notifications_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
