use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::driver::application::ports::outgoing::DriverRepository;
use crate::order::application::ports::outgoing::{OrderRepository, OrderRepositoryError};
use crate::payment::application::ports::incoming::use_cases::{
    GetPaymentError, GetPaymentUseCase,
};
use crate::payment::application::ports::outgoing::{
    PaymentRecord, PaymentRepository, PaymentRepositoryError,
};
use crate::vendor::application::ports::outgoing::VendorRepository;

pub struct GetPaymentService<
    P: PaymentRepository,
    O: OrderRepository,
    V: VendorRepository,
    D: DriverRepository,
> {
    payment_repository: P,
    order_repository: O,
    vendor_repository: V,
    driver_repository: D,
}

impl<P: PaymentRepository, O: OrderRepository, V: VendorRepository, D: DriverRepository>
    GetPaymentService<P, O, V, D>
{
    pub fn new(
        payment_repository: P,
        order_repository: O,
        vendor_repository: V,
        driver_repository: D,
    ) -> Self {
        Self {
            payment_repository,
            order_repository,
            vendor_repository,
            driver_repository,
        }
    }
}

#[async_trait]
impl<P: PaymentRepository, O: OrderRepository, V: VendorRepository, D: DriverRepository>
    GetPaymentUseCase for GetPaymentService<P, O, V, D>
{
    async fn execute(
        &self,
        user_id: Uuid,
        role: UserRole,
        order_id: Uuid,
    ) -> Result<PaymentRecord, GetPaymentError> {
        let order = self
            .order_repository
            .find_by_id(order_id)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::NotFound => GetPaymentError::OrderNotFound,
                other => GetPaymentError::RepositoryError(other.to_string()),
            })?;

        let visible = match role {
            UserRole::Admin => true,
            UserRole::Customer => order.customer_id == user_id,
            UserRole::Vendor => match self.vendor_repository.find_by_user_id(user_id).await {
                Ok(vendor) => order.vendor_id == vendor.id,
                Err(_) => false,
            },
            UserRole::Driver => match self.driver_repository.find_by_user_id(user_id).await {
                Ok(driver) => order.driver_id == Some(driver.id),
                Err(_) => false,
            },
        };
        if !visible {
            return Err(GetPaymentError::Forbidden);
        }

        self.payment_repository
            .find_by_order_id(order_id)
            .await
            .map_err(|e| match e {
                PaymentRepositoryError::NotFound => GetPaymentError::PaymentNotFound,
                other => GetPaymentError::RepositoryError(other.to_string()),
            })
    }
}
