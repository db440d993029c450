use std::sync::Arc;

use actix_web::web;

use crate::account::application::ports::incoming::use_cases::{
    DeleteUsersUseCase, ListUsersUseCase, ModerateUserUseCase,
};
use crate::account::application::AccountUseCases;
use crate::auth::application::use_cases::fetch_profile::IFetchProfileUseCase;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::logout_user::ILogoutUseCase;
use crate::auth::application::use_cases::refresh_token::IRefreshTokenUseCase;
use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::catalog::application::ports::incoming::use_cases::{
    CreateProductUseCase, DeleteProductUseCase, ListVendorProductsUseCase, UpdateProductUseCase,
};
use crate::catalog::application::CatalogUseCases;
use crate::driver::application::ports::incoming::use_cases::{
    GetDriverProfileUseCase, LinkDriverUseCase, ListFleetUseCase, SetAvailabilityUseCase,
    UpdateDriverProfileUseCase,
};
use crate::driver::application::DriverUseCases;
use crate::notification::adapter::outgoing::RealtimeHub;
use crate::notification::application::notification_use_cases::NotificationUseCases;
use crate::notification::application::ports::incoming::use_cases::{
    ListNotificationsUseCase, MarkNotificationReadUseCase,
};
use crate::order::application::ports::incoming::use_cases::{
    AcceptOrderUseCase, AdvanceOrderStatusUseCase, AssignDriverUseCase, CancelOrderUseCase,
    DeliverOrderUseCase, GetOrderUseCase, ListOrdersUseCase, PlaceOrderUseCase,
    ReviewOrderUseCase,
};
use crate::order::application::OrderUseCases;
use crate::payment::application::ports::incoming::use_cases::{
    ConfirmPaymentUseCase, GetPaymentUseCase,
};
use crate::payment::application::PaymentUseCases;
use crate::tests::support::stubs::*;
use crate::vendor::application::ports::incoming::use_cases::{
    GetVendorProfileUseCase, ListVendorsUseCase, UpdateVendorProfileUseCase, UploadLogoUseCase,
};
use crate::vendor::application::vendor_use_cases::VendorUseCases;
use crate::AppState;

pub struct TestAppStateBuilder {
    register_user: Option<Arc<dyn IRegisterUserUseCase + Send + Sync>>,
    login_user: Option<Arc<dyn ILoginUserUseCase + Send + Sync>>,
    refresh_token: Option<Arc<dyn IRefreshTokenUseCase + Send + Sync>>,
    logout: Option<Arc<dyn ILogoutUseCase + Send + Sync>>,
    fetch_profile: Option<Arc<dyn IFetchProfileUseCase + Send + Sync>>,
    vendor: Option<VendorUseCases>,
    driver: Option<DriverUseCases>,
    account: Option<AccountUseCases>,
    catalog: Option<CatalogUseCases>,
    order: Option<OrderUseCases>,
    payment: Option<PaymentUseCases>,
    notification: Option<NotificationUseCases>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Some(Arc::new(StubRegisterUserUseCase)),
            login_user: Some(Arc::new(StubLoginUserUseCase)),
            refresh_token: Some(Arc::new(StubRefreshTokenUseCase)),
            logout: Some(Arc::new(StubLogoutUseCase)),
            fetch_profile: Some(Arc::new(StubFetchProfileUseCase)),
            vendor: Some(VendorUseCases {
                list: Arc::new(StubListVendorsUseCase),
                get_profile: Arc::new(StubGetVendorProfileUseCase),
                update_profile: Arc::new(StubUpdateVendorProfileUseCase),
                upload_logo: Arc::new(StubUploadLogoUseCase),
            }),
            driver: Some(DriverUseCases {
                get_profile: Arc::new(StubGetDriverProfileUseCase),
                update_profile: Arc::new(StubUpdateDriverProfileUseCase),
                set_availability: Arc::new(StubSetAvailabilityUseCase),
                link_driver: Arc::new(StubLinkDriverUseCase),
                list_fleet: Arc::new(StubListFleetUseCase),
            }),
            account: Some(AccountUseCases {
                list_users: Arc::new(StubListUsersUseCase),
                moderate_user: Arc::new(StubModerateUserUseCase),
                delete_users: Arc::new(StubDeleteUsersUseCase),
            }),
            catalog: Some(CatalogUseCases {
                list_products: Arc::new(StubListVendorProductsUseCase),
                create_product: Arc::new(StubCreateProductUseCase),
                update_product: Arc::new(StubUpdateProductUseCase),
                delete_product: Arc::new(StubDeleteProductUseCase),
            }),
            order: Some(OrderUseCases {
                place: Arc::new(StubPlaceOrderUseCase),
                accept: Arc::new(StubAcceptOrderUseCase),
                assign: Arc::new(StubAssignDriverUseCase),
                advance: Arc::new(StubAdvanceOrderStatusUseCase),
                deliver: Arc::new(StubDeliverOrderUseCase),
                cancel: Arc::new(StubCancelOrderUseCase),
                list: Arc::new(StubListOrdersUseCase),
                get: Arc::new(StubGetOrderUseCase),
                review: Arc::new(StubReviewOrderUseCase),
            }),
            payment: Some(PaymentUseCases {
                confirm: Arc::new(StubConfirmPaymentUseCase),
                get: Arc::new(StubGetPaymentUseCase),
            }),
            notification: Some(NotificationUseCases {
                list: Arc::new(StubListNotificationsUseCase),
                mark_read: Arc::new(StubMarkNotificationReadUseCase),
                realtime: Arc::new(RealtimeHub::new()),
            }),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Some(Arc::new(uc));
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Some(Arc::new(uc));
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl IRefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.refresh_token = Some(Arc::new(uc));
        self
    }

    pub fn with_logout(mut self, uc: impl ILogoutUseCase + Send + Sync + 'static) -> Self {
        self.logout = Some(Arc::new(uc));
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl IFetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_list_vendors(mut self, uc: impl ListVendorsUseCase + 'static) -> Self {
        let vendor = self
            .vendor
            .as_mut()
            .expect("Vendor use cases must be initialized");
        vendor.list = Arc::new(uc);
        self
    }

    pub fn with_get_vendor_profile(mut self, uc: impl GetVendorProfileUseCase + 'static) -> Self {
        let vendor = self
            .vendor
            .as_mut()
            .expect("Vendor use cases must be initialized");
        vendor.get_profile = Arc::new(uc);
        self
    }

    pub fn with_update_vendor_profile(
        mut self,
        uc: impl UpdateVendorProfileUseCase + 'static,
    ) -> Self {
        let vendor = self
            .vendor
            .as_mut()
            .expect("Vendor use cases must be initialized");
        vendor.update_profile = Arc::new(uc);
        self
    }

    pub fn with_upload_logo(mut self, uc: impl UploadLogoUseCase + 'static) -> Self {
        let vendor = self
            .vendor
            .as_mut()
            .expect("Vendor use cases must be initialized");
        vendor.upload_logo = Arc::new(uc);
        self
    }

    pub fn with_get_driver_profile(mut self, uc: impl GetDriverProfileUseCase + 'static) -> Self {
        let driver = self
            .driver
            .as_mut()
            .expect("Driver use cases must be initialized");
        driver.get_profile = Arc::new(uc);
        self
    }

    pub fn with_update_driver_profile(
        mut self,
        uc: impl UpdateDriverProfileUseCase + 'static,
    ) -> Self {
        let driver = self
            .driver
            .as_mut()
            .expect("Driver use cases must be initialized");
        driver.update_profile = Arc::new(uc);
        self
    }

    pub fn with_set_availability(mut self, uc: impl SetAvailabilityUseCase + 'static) -> Self {
        let driver = self
            .driver
            .as_mut()
            .expect("Driver use cases must be initialized");
        driver.set_availability = Arc::new(uc);
        self
    }

    pub fn with_link_driver(mut self, uc: impl LinkDriverUseCase + 'static) -> Self {
        let driver = self
            .driver
            .as_mut()
            .expect("Driver use cases must be initialized");
        driver.link_driver = Arc::new(uc);
        self
    }

    pub fn with_list_fleet(mut self, uc: impl ListFleetUseCase + 'static) -> Self {
        let driver = self
            .driver
            .as_mut()
            .expect("Driver use cases must be initialized");
        driver.list_fleet = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl ListUsersUseCase + 'static) -> Self {
        let account = self
            .account
            .as_mut()
            .expect("Account use cases must be initialized");
        account.list_users = Arc::new(uc);
        self
    }

    pub fn with_moderate_user(mut self, uc: impl ModerateUserUseCase + 'static) -> Self {
        let account = self
            .account
            .as_mut()
            .expect("Account use cases must be initialized");
        account.moderate_user = Arc::new(uc);
        self
    }

    pub fn with_delete_users(mut self, uc: impl DeleteUsersUseCase + 'static) -> Self {
        let account = self
            .account
            .as_mut()
            .expect("Account use cases must be initialized");
        account.delete_users = Arc::new(uc);
        self
    }

    pub fn with_list_products(mut self, uc: impl ListVendorProductsUseCase + 'static) -> Self {
        let catalog = self
            .catalog
            .as_mut()
            .expect("Catalog use cases must be initialized");
        catalog.list_products = Arc::new(uc);
        self
    }

    pub fn with_create_product(mut self, uc: impl CreateProductUseCase + 'static) -> Self {
        let catalog = self
            .catalog
            .as_mut()
            .expect("Catalog use cases must be initialized");
        catalog.create_product = Arc::new(uc);
        self
    }

    pub fn with_update_product(mut self, uc: impl UpdateProductUseCase + 'static) -> Self {
        let catalog = self
            .catalog
            .as_mut()
            .expect("Catalog use cases must be initialized");
        catalog.update_product = Arc::new(uc);
        self
    }

    pub fn with_delete_product(mut self, uc: impl DeleteProductUseCase + 'static) -> Self {
        let catalog = self
            .catalog
            .as_mut()
            .expect("Catalog use cases must be initialized");
        catalog.delete_product = Arc::new(uc);
        self
    }

    pub fn with_place_order(mut self, uc: impl PlaceOrderUseCase + 'static) -> Self {
        let order = self
            .order
            .as_mut()
            .expect("Order use cases must be initialized");
        order.place = Arc::new(uc);
        self
    }

    pub fn with_accept_order(mut self, uc: impl AcceptOrderUseCase + 'static) -> Self {
        let order = self
            .order
            .as_mut()
            .expect("Order use cases must be initialized");
        order.accept = Arc::new(uc);
        self
    }

    pub fn with_assign_driver(mut self, uc: impl AssignDriverUseCase + 'static) -> Self {
        let order = self
            .order
            .as_mut()
            .expect("Order use cases must be initialized");
        order.assign = Arc::new(uc);
        self
    }

    pub fn with_advance_order_status(
        mut self,
        uc: impl AdvanceOrderStatusUseCase + 'static,
    ) -> Self {
        let order = self
            .order
            .as_mut()
            .expect("Order use cases must be initialized");
        order.advance = Arc::new(uc);
        self
    }

    pub fn with_deliver_order(mut self, uc: impl DeliverOrderUseCase + 'static) -> Self {
        let order = self
            .order
            .as_mut()
            .expect("Order use cases must be initialized");
        order.deliver = Arc::new(uc);
        self
    }

    pub fn with_cancel_order(mut self, uc: impl CancelOrderUseCase + 'static) -> Self {
        let order = self
            .order
            .as_mut()
            .expect("Order use cases must be initialized");
        order.cancel = Arc::new(uc);
        self
    }

    pub fn with_list_orders(mut self, uc: impl ListOrdersUseCase + 'static) -> Self {
        let order = self
            .order
            .as_mut()
            .expect("Order use cases must be initialized");
        order.list = Arc::new(uc);
        self
    }

    pub fn with_get_order(mut self, uc: impl GetOrderUseCase + 'static) -> Self {
        let order = self
            .order
            .as_mut()
            .expect("Order use cases must be initialized");
        order.get = Arc::new(uc);
        self
    }

    pub fn with_review_order(mut self, uc: impl ReviewOrderUseCase + 'static) -> Self {
        let order = self
            .order
            .as_mut()
            .expect("Order use cases must be initialized");
        order.review = Arc::new(uc);
        self
    }

    pub fn with_confirm_payment(mut self, uc: impl ConfirmPaymentUseCase + 'static) -> Self {
        let payment = self
            .payment
            .as_mut()
            .expect("Payment use cases must be initialized");
        payment.confirm = Arc::new(uc);
        self
    }

    pub fn with_get_payment(mut self, uc: impl GetPaymentUseCase + 'static) -> Self {
        let payment = self
            .payment
            .as_mut()
            .expect("Payment use cases must be initialized");
        payment.get = Arc::new(uc);
        self
    }

    pub fn with_list_notifications(mut self, uc: impl ListNotificationsUseCase + 'static) -> Self {
        let notification = self
            .notification
            .as_mut()
            .expect("Notification use cases must be initialized");
        notification.list = Arc::new(uc);
        self
    }

    pub fn with_mark_notification_read(
        mut self,
        uc: impl MarkNotificationReadUseCase + 'static,
    ) -> Self {
        let notification = self
            .notification
            .as_mut()
            .expect("Notification use cases must be initialized");
        notification.mark_read = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user.unwrap(),
            login_user_use_case: self.login_user.unwrap(),
            refresh_token_use_case: self.refresh_token.unwrap(),
            logout_use_case: self.logout.unwrap(),
            fetch_profile_use_case: self.fetch_profile.unwrap(),
            vendor_use_cases: self.vendor.unwrap(),
            driver_use_cases: self.driver.unwrap(),
            account_use_cases: self.account.unwrap(),
            catalog_use_cases: self.catalog.unwrap(),
            order_use_cases: self.order.unwrap(),
            payment_use_cases: self.payment.unwrap(),
            notification_use_cases: self.notification.unwrap(),
        })
    }
}
