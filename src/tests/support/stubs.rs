//! Default use case stubs for `TestAppStateBuilder`.
//!
//! Every stub answers with its failure variant; a route test replaces the
//! one use case it exercises and leaves the rest untouched.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AccountStatus, UserRole};
use crate::auth::application::use_cases::fetch_profile::{
    FetchProfileError, IFetchProfileUseCase, UserProfile,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::logout_user::{ILogoutUseCase, LogoutError};
use crate::auth::application::use_cases::refresh_token::{IRefreshTokenUseCase, RefreshTokenError};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterError, RegisterRequest,
};
use crate::auth::application::ports::outgoing::user_repository::UserResult;

use crate::account::application::ports::incoming::use_cases::{
    DeleteUsersError, DeleteUsersUseCase, ListUsersError, ListUsersQuery, ListUsersUseCase,
    ModerateUserError, ModerateUserUseCase,
};
use crate::account::application::ports::outgoing::UserPage;

use crate::catalog::application::ports::incoming::use_cases::{
    CreateProductError, CreateProductUseCase, DeleteProductError, DeleteProductUseCase,
    ListVendorProductsError, ListVendorProductsUseCase, ProductCommand, UpdateProductError,
    UpdateProductUseCase,
};
use crate::catalog::application::ports::outgoing::Product;

use crate::driver::application::domain::entities::DriverAvailability;
use crate::driver::application::ports::incoming::use_cases::{
    GetDriverProfileError, GetDriverProfileUseCase, LinkDriverError, LinkDriverUseCase,
    ListFleetError, ListFleetUseCase, SetAvailabilityError, SetAvailabilityUseCase,
    UpdateDriverProfileCommand, UpdateDriverProfileError, UpdateDriverProfileUseCase,
};
use crate::driver::application::ports::outgoing::DriverProfile;

use crate::notification::application::ports::incoming::use_cases::{
    ListNotificationsError, ListNotificationsUseCase, MarkNotificationReadError,
    MarkNotificationReadUseCase,
};
use crate::notification::application::ports::outgoing::NotificationResult;

use crate::order::application::domain::status::OrderStatus;
use crate::order::application::ports::incoming::use_cases::{
    AcceptOrderError, AcceptOrderUseCase, AdvanceOrderStatusError, AdvanceOrderStatusUseCase,
    AssignDriverError, AssignDriverUseCase, CancelOrderError, CancelOrderUseCase,
    DeliverOrderError, DeliverOrderUseCase, GetOrderError, GetOrderUseCase, ListOrdersError,
    ListOrdersUseCase, PlaceOrderCommand, PlaceOrderError, PlaceOrderUseCase, ReviewCommand,
    ReviewOrderError, ReviewOrderUseCase,
};
use crate::order::application::ports::outgoing::{OrderRecord, OrderWithItems};

use crate::payment::application::ports::incoming::use_cases::{
    ConfirmPaymentError, ConfirmPaymentUseCase, GetPaymentError, GetPaymentUseCase,
};
use crate::payment::application::ports::outgoing::PaymentRecord;

use crate::vendor::application::ports::incoming::use_cases::{
    GetVendorProfileError, GetVendorProfileUseCase, ListVendorsError, ListVendorsUseCase,
    UpdateVendorProfileCommand, UpdateVendorProfileError, UpdateVendorProfileUseCase,
    UploadLogoCommand, UploadLogoError, UploadLogoUseCase,
};
use crate::vendor::application::ports::outgoing::{VendorProfile, VendorSummary};

const NOT_WIRED: &str = "not wired in this test";

// ---------------------------------------------------------------- auth

pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _request: RegisterRequest) -> Result<UserResult, RegisterError> {
        Err(RegisterError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::QueryError(NOT_WIRED.into()))
    }
}

pub struct StubRefreshTokenUseCase;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(&self, _refresh_token: &str) -> Result<String, RefreshTokenError> {
        Err(RefreshTokenError::BlacklistError(NOT_WIRED.into()))
    }
}

pub struct StubLogoutUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUseCase {
    async fn execute(&self, _refresh_token: &str) -> Result<(), LogoutError> {
        Err(LogoutError::BlacklistError(NOT_WIRED.into()))
    }
}

pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserProfile, FetchProfileError> {
        Err(FetchProfileError::QueryError(NOT_WIRED.into()))
    }
}

// ---------------------------------------------------------------- vendor

pub struct StubListVendorsUseCase;

#[async_trait]
impl ListVendorsUseCase for StubListVendorsUseCase {
    async fn execute(&self) -> Result<Vec<VendorSummary>, ListVendorsError> {
        Err(ListVendorsError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubGetVendorProfileUseCase;

#[async_trait]
impl GetVendorProfileUseCase for StubGetVendorProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<VendorProfile, GetVendorProfileError> {
        Err(GetVendorProfileError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubUpdateVendorProfileUseCase;

#[async_trait]
impl UpdateVendorProfileUseCase for StubUpdateVendorProfileUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _command: UpdateVendorProfileCommand,
    ) -> Result<VendorProfile, UpdateVendorProfileError> {
        Err(UpdateVendorProfileError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubUploadLogoUseCase;

#[async_trait]
impl UploadLogoUseCase for StubUploadLogoUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _command: UploadLogoCommand,
    ) -> Result<VendorProfile, UploadLogoError> {
        Err(UploadLogoError::RepositoryError(NOT_WIRED.into()))
    }
}

// ---------------------------------------------------------------- driver

pub struct StubGetDriverProfileUseCase;

#[async_trait]
impl GetDriverProfileUseCase for StubGetDriverProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<DriverProfile, GetDriverProfileError> {
        Err(GetDriverProfileError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubUpdateDriverProfileUseCase;

#[async_trait]
impl UpdateDriverProfileUseCase for StubUpdateDriverProfileUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _command: UpdateDriverProfileCommand,
    ) -> Result<DriverProfile, UpdateDriverProfileError> {
        Err(UpdateDriverProfileError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubSetAvailabilityUseCase;

#[async_trait]
impl SetAvailabilityUseCase for StubSetAvailabilityUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _availability: DriverAvailability,
    ) -> Result<DriverProfile, SetAvailabilityError> {
        Err(SetAvailabilityError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubLinkDriverUseCase;

#[async_trait]
impl LinkDriverUseCase for StubLinkDriverUseCase {
    async fn execute(
        &self,
        _vendor_user_id: Uuid,
        _driver_id: Uuid,
    ) -> Result<DriverProfile, LinkDriverError> {
        Err(LinkDriverError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubListFleetUseCase;

#[async_trait]
impl ListFleetUseCase for StubListFleetUseCase {
    async fn execute(&self, _vendor_user_id: Uuid) -> Result<Vec<DriverProfile>, ListFleetError> {
        Err(ListFleetError::RepositoryError(NOT_WIRED.into()))
    }
}

// ---------------------------------------------------------------- account

pub struct StubListUsersUseCase;

#[async_trait]
impl ListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self, _query: ListUsersQuery) -> Result<UserPage, ListUsersError> {
        Err(ListUsersError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubModerateUserUseCase;

#[async_trait]
impl ModerateUserUseCase for StubModerateUserUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _new_status: AccountStatus,
    ) -> Result<AccountStatus, ModerateUserError> {
        Err(ModerateUserError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubDeleteUsersUseCase;

#[async_trait]
impl DeleteUsersUseCase for StubDeleteUsersUseCase {
    async fn execute(&self, _user_ids: Vec<Uuid>) -> Result<u64, DeleteUsersError> {
        Err(DeleteUsersError::RepositoryError(NOT_WIRED.into()))
    }
}

// ---------------------------------------------------------------- catalog

pub struct StubListVendorProductsUseCase;

#[async_trait]
impl ListVendorProductsUseCase for StubListVendorProductsUseCase {
    async fn execute(&self, _vendor_id: Uuid) -> Result<Vec<Product>, ListVendorProductsError> {
        Err(ListVendorProductsError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubCreateProductUseCase;

#[async_trait]
impl CreateProductUseCase for StubCreateProductUseCase {
    async fn execute(
        &self,
        _vendor_user_id: Uuid,
        _command: ProductCommand,
    ) -> Result<Product, CreateProductError> {
        Err(CreateProductError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubUpdateProductUseCase;

#[async_trait]
impl UpdateProductUseCase for StubUpdateProductUseCase {
    async fn execute(
        &self,
        _vendor_user_id: Uuid,
        _product_id: Uuid,
        _command: ProductCommand,
    ) -> Result<Product, UpdateProductError> {
        Err(UpdateProductError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubDeleteProductUseCase;

#[async_trait]
impl DeleteProductUseCase for StubDeleteProductUseCase {
    async fn execute(&self, _vendor_user_id: Uuid, _product_id: Uuid) -> Result<(), DeleteProductError> {
        Err(DeleteProductError::RepositoryError(NOT_WIRED.into()))
    }
}

// ---------------------------------------------------------------- notification

pub struct StubListNotificationsUseCase;

#[async_trait]
impl ListNotificationsUseCase for StubListNotificationsUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _unread_only: bool,
    ) -> Result<Vec<NotificationResult>, ListNotificationsError> {
        Err(ListNotificationsError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubMarkNotificationReadUseCase;

#[async_trait]
impl MarkNotificationReadUseCase for StubMarkNotificationReadUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _notification_id: Uuid,
    ) -> Result<NotificationResult, MarkNotificationReadError> {
        Err(MarkNotificationReadError::RepositoryError(NOT_WIRED.into()))
    }
}

// ---------------------------------------------------------------- order

pub struct StubPlaceOrderUseCase;

#[async_trait]
impl PlaceOrderUseCase for StubPlaceOrderUseCase {
    async fn execute(
        &self,
        _customer_id: Uuid,
        _command: PlaceOrderCommand,
    ) -> Result<OrderWithItems, PlaceOrderError> {
        Err(PlaceOrderError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubAcceptOrderUseCase;

#[async_trait]
impl AcceptOrderUseCase for StubAcceptOrderUseCase {
    async fn execute(
        &self,
        _vendor_user_id: Uuid,
        _order_id: Uuid,
    ) -> Result<OrderRecord, AcceptOrderError> {
        Err(AcceptOrderError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubAssignDriverUseCase;

#[async_trait]
impl AssignDriverUseCase for StubAssignDriverUseCase {
    async fn execute(
        &self,
        _vendor_user_id: Uuid,
        _order_id: Uuid,
        _driver_id: Uuid,
    ) -> Result<OrderRecord, AssignDriverError> {
        Err(AssignDriverError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubAdvanceOrderStatusUseCase;

#[async_trait]
impl AdvanceOrderStatusUseCase for StubAdvanceOrderStatusUseCase {
    async fn execute(
        &self,
        _driver_user_id: Uuid,
        _order_id: Uuid,
        _target: OrderStatus,
    ) -> Result<OrderRecord, AdvanceOrderStatusError> {
        Err(AdvanceOrderStatusError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubDeliverOrderUseCase;

#[async_trait]
impl DeliverOrderUseCase for StubDeliverOrderUseCase {
    async fn execute(
        &self,
        _driver_user_id: Uuid,
        _order_id: Uuid,
    ) -> Result<OrderRecord, DeliverOrderError> {
        Err(DeliverOrderError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubCancelOrderUseCase;

#[async_trait]
impl CancelOrderUseCase for StubCancelOrderUseCase {
    async fn execute(
        &self,
        _customer_id: Uuid,
        _order_id: Uuid,
    ) -> Result<OrderRecord, CancelOrderError> {
        Err(CancelOrderError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubListOrdersUseCase;

#[async_trait]
impl ListOrdersUseCase for StubListOrdersUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _role: UserRole,
    ) -> Result<Vec<OrderRecord>, ListOrdersError> {
        Err(ListOrdersError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubGetOrderUseCase;

#[async_trait]
impl GetOrderUseCase for StubGetOrderUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _role: UserRole,
        _order_id: Uuid,
    ) -> Result<OrderWithItems, GetOrderError> {
        Err(GetOrderError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubReviewOrderUseCase;

#[async_trait]
impl ReviewOrderUseCase for StubReviewOrderUseCase {
    async fn execute(
        &self,
        _customer_id: Uuid,
        _order_id: Uuid,
        _command: ReviewCommand,
    ) -> Result<(), ReviewOrderError> {
        Err(ReviewOrderError::RepositoryError(NOT_WIRED.into()))
    }
}

// ---------------------------------------------------------------- payment

pub struct StubConfirmPaymentUseCase;

#[async_trait]
impl ConfirmPaymentUseCase for StubConfirmPaymentUseCase {
    async fn execute(
        &self,
        _customer_id: Uuid,
        _order_id: Uuid,
        _tx_ref: String,
    ) -> Result<PaymentRecord, ConfirmPaymentError> {
        Err(ConfirmPaymentError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubGetPaymentUseCase;

#[async_trait]
impl GetPaymentUseCase for StubGetPaymentUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _role: UserRole,
        _order_id: Uuid,
    ) -> Result<PaymentRecord, GetPaymentError> {
        Err(GetPaymentError::RepositoryError(NOT_WIRED.into()))
    }
}
