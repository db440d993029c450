use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::notification::application::domain::entities::NotificationKind;
use crate::notification::application::ports::outgoing::{NotificationDraft, NotificationPublisher};
use crate::order::application::ports::incoming::use_cases::{CancelOrderError, CancelOrderUseCase};
use crate::order::application::ports::outgoing::{
    OrderRecord, OrderRepository, OrderRepositoryError,
};
use crate::vendor::application::ports::outgoing::VendorRepository;

pub struct CancelOrderService<O: OrderRepository, V: VendorRepository> {
    order_repository: O,
    vendor_repository: V,
    publisher: Arc<dyn NotificationPublisher>,
}

impl<O: OrderRepository, V: VendorRepository> CancelOrderService<O, V> {
    pub fn new(
        order_repository: O,
        vendor_repository: V,
        publisher: Arc<dyn NotificationPublisher>,
    ) -> Self {
        Self {
            order_repository,
            vendor_repository,
            publisher,
        }
    }
}

#[async_trait]
impl<O: OrderRepository, V: VendorRepository> CancelOrderUseCase for CancelOrderService<O, V> {
    async fn execute(
        &self,
        customer_id: Uuid,
        order_id: Uuid,
    ) -> Result<OrderRecord, CancelOrderError> {
        let order = self
            .order_repository
            .find_by_id(order_id)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::NotFound => CancelOrderError::OrderNotFound,
                other => CancelOrderError::RepositoryError(other.to_string()),
            })?;

        if order.customer_id != customer_id {
            return Err(CancelOrderError::NotOwner);
        }
        if !order.status.is_cancellable() {
            return Err(CancelOrderError::InvalidTransition { from: order.status });
        }

        let cancelled = self
            .order_repository
            .cancel(order_id, order.status)
            .await
            .map_err(|e| match e {
                // The vendor accepted or assigned it while we were looking.
                OrderRepositoryError::StaleStatus(from) => {
                    CancelOrderError::InvalidTransition { from }
                }
                other => CancelOrderError::RepositoryError(other.to_string()),
            })?;

        match self.vendor_repository.find_by_id(cancelled.vendor_id).await {
            Ok(vendor) => {
                self.publisher
                    .publish(NotificationDraft::order_event(
                        vendor.user_id,
                        NotificationKind::OrderStatusChanged,
                        cancelled.id,
                        "Order cancelled",
                        format!("Order {} was cancelled by the customer", cancelled.id),
                    ))
                    .await;
            }
            Err(e) => warn!(order_id = %cancelled.id, "skipping cancel notification: {e}"),
        }

        Ok(cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    use crate::order::application::domain::OrderStatus;
    use crate::order::application::ports::outgoing::{NewOrderData, OrderWithItems, ReviewData};
    use crate::vendor::application::ports::outgoing::{
        UpdateVendorProfileData, VendorProfile, VendorRepositoryError, VendorSummary,
    };

    struct StubOrderRepo {
        order: OrderRecord,
        raced: bool,
    }

    #[async_trait]
    impl OrderRepository for StubOrderRepo {
        async fn create_order(
            &self,
            _data: NewOrderData,
        ) -> Result<OrderWithItems, OrderRepositoryError> {
            unimplemented!()
        }

        async fn find_by_id(&self, _order_id: Uuid) -> Result<OrderRecord, OrderRepositoryError> {
            Ok(self.order.clone())
        }

        async fn find_with_items(
            &self,
            _order_id: Uuid,
        ) -> Result<OrderWithItems, OrderRepositoryError> {
            unimplemented!()
        }

        async fn set_status(
            &self,
            _order_id: Uuid,
            _from: OrderStatus,
            _to: OrderStatus,
        ) -> Result<OrderRecord, OrderRepositoryError> {
            unimplemented!()
        }

        async fn assign_driver(
            &self,
            _order_id: Uuid,
            _driver_id: Uuid,
        ) -> Result<OrderRecord, OrderRepositoryError> {
            unimplemented!()
        }

        async fn deliver(
            &self,
            _order_id: Uuid,
            _driver_id: Uuid,
            _settle_cod: bool,
        ) -> Result<OrderRecord, OrderRepositoryError> {
            unimplemented!()
        }

        async fn cancel(
            &self,
            _order_id: Uuid,
            from: OrderStatus,
        ) -> Result<OrderRecord, OrderRepositoryError> {
            if self.raced {
                return Err(OrderRepositoryError::StaleStatus(from));
            }
            let mut order = self.order.clone();
            order.status = OrderStatus::Cancelled;
            Ok(order)
        }

        async fn list_for_customer(
            &self,
            _customer_id: Uuid,
        ) -> Result<Vec<OrderRecord>, OrderRepositoryError> {
            unimplemented!()
        }

        async fn list_for_vendor(
            &self,
            _vendor_id: Uuid,
        ) -> Result<Vec<OrderRecord>, OrderRepositoryError> {
            unimplemented!()
        }

        async fn list_for_driver(
            &self,
            _driver_id: Uuid,
        ) -> Result<Vec<OrderRecord>, OrderRepositoryError> {
            unimplemented!()
        }

        async fn add_review(&self, _data: ReviewData) -> Result<(), OrderRepositoryError> {
            unimplemented!()
        }
    }

    struct StubVendorRepo;

    #[async_trait]
    impl VendorRepository for StubVendorRepo {
        async fn find_by_user_id(
            &self,
            _user_id: Uuid,
        ) -> Result<VendorProfile, VendorRepositoryError> {
            unimplemented!()
        }

        async fn find_by_id(&self, vendor_id: Uuid) -> Result<VendorProfile, VendorRepositoryError> {
            Ok(VendorProfile {
                id: vendor_id,
                user_id: Uuid::new_v4(),
                business_name: "Lagos Fuels".to_string(),
                address: "12 Marina Rd".to_string(),
                description: String::new(),
                logo_path: None,
                verified: true,
                rating_avg: Decimal::ZERO,
                rating_count: 0,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }

        async fn list_verified(&self) -> Result<Vec<VendorSummary>, VendorRepositoryError> {
            unimplemented!()
        }

        async fn update_profile(
            &self,
            _user_id: Uuid,
            _data: UpdateVendorProfileData,
        ) -> Result<VendorProfile, VendorRepositoryError> {
            unimplemented!()
        }

        async fn set_logo_path(
            &self,
            _user_id: Uuid,
            _logo_path: String,
        ) -> Result<VendorProfile, VendorRepositoryError> {
            unimplemented!()
        }
    }

    struct SilentPublisher;

    #[async_trait]
    impl NotificationPublisher for SilentPublisher {
        async fn publish(&self, _draft: NotificationDraft) {}
    }

    fn order(customer_id: Uuid, status: OrderStatus) -> OrderRecord {
        OrderRecord {
            id: Uuid::new_v4(),
            customer_id,
            vendor_id: Uuid::new_v4(),
            driver_id: None,
            status,
            delivery_address: "14 Wharf Rd".to_string(),
            total_amount: Decimal::new(1_790_000, 2),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn pending_orders_can_be_cancelled_by_their_owner() {
        let customer_id = Uuid::new_v4();
        let service = CancelOrderService::new(
            StubOrderRepo {
                order: order(customer_id, OrderStatus::Pending),
                raced: false,
            },
            StubVendorRepo,
            Arc::new(SilentPublisher),
        );

        let cancelled = service.execute(customer_id, Uuid::new_v4()).await.unwrap();
        assert_eq!(cancelled.status, OrderStatus::Cancelled);
    }

    #[tokio::test]
    async fn assigned_orders_can_no_longer_be_cancelled() {
        let customer_id = Uuid::new_v4();
        let service = CancelOrderService::new(
            StubOrderRepo {
                order: order(customer_id, OrderStatus::Assigned),
                raced: false,
            },
            StubVendorRepo,
            Arc::new(SilentPublisher),
        );

        let result = service.execute(customer_id, Uuid::new_v4()).await;
        assert!(matches!(
            result,
            Err(CancelOrderError::InvalidTransition {
                from: OrderStatus::Assigned
            })
        ));
    }

    #[tokio::test]
    async fn other_customers_cannot_cancel() {
        let service = CancelOrderService::new(
            StubOrderRepo {
                order: order(Uuid::new_v4(), OrderStatus::Pending),
                raced: false,
            },
            StubVendorRepo,
            Arc::new(SilentPublisher),
        );

        let result = service.execute(Uuid::new_v4(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(CancelOrderError::NotOwner)));
    }

    #[tokio::test]
    async fn a_cancel_losing_the_race_reports_the_transition_conflict() {
        let customer_id = Uuid::new_v4();
        let service = CancelOrderService::new(
            StubOrderRepo {
                order: order(customer_id, OrderStatus::Accepted),
                raced: true,
            },
            StubVendorRepo,
            Arc::new(SilentPublisher),
        );

        let result = service.execute(customer_id, Uuid::new_v4()).await;
        assert!(matches!(
            result,
            Err(CancelOrderError::InvalidTransition {
                from: OrderStatus::Accepted
            })
        ));
    }
}
