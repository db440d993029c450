use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::driver::application::domain::entities::DriverAvailability;
use crate::modules::catalog::adapter::outgoing::sea_orm_entity as products;
use crate::modules::driver::adapter::outgoing::sea_orm_entity as drivers;
use crate::modules::payment::adapter::outgoing::sea_orm_entity as payments;
use crate::modules::vendor::adapter::outgoing::sea_orm_entity as vendors;
use crate::order::application::domain::OrderStatus;
use crate::order::application::ports::outgoing::{
    NewOrderData, OrderRecord, OrderRepository, OrderRepositoryError, OrderWithItems, ReviewData,
};
use crate::payment::application::domain::entities::PaymentStatus;

use super::sea_orm_entity::{order_items, orders, reviews};

#[derive(Clone)]
pub struct OrderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_record(model: orders::Model) -> Result<OrderRecord, OrderRepositoryError> {
        model.to_record().ok_or_else(|| {
            OrderRepositoryError::DatabaseError(format!("Unknown order status: {}", model.status))
        })
    }

    fn db_err(e: sea_orm::DbErr) -> OrderRepositoryError {
        OrderRepositoryError::DatabaseError(e.to_string())
    }

    async fn find_model_in(
        txn: &DatabaseTransaction,
        order_id: Uuid,
    ) -> Result<orders::Model, OrderRepositoryError> {
        orders::Entity::find_by_id(order_id)
            .one(txn)
            .await
            .map_err(Self::db_err)?
            .ok_or(OrderRepositoryError::NotFound)
    }

    /// Folds one new rating into a stored (avg, count) pair.
    fn fold_rating(avg: Decimal, count: i32, rating: i32) -> (Decimal, i32) {
        let new_count = count + 1;
        let new_avg =
            (avg * Decimal::from(count) + Decimal::from(rating)) / Decimal::from(new_count);
        (new_avg.round_dp(2), new_count)
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn create_order(
        &self,
        data: NewOrderData,
    ) -> Result<OrderWithItems, OrderRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::db_err)?;
        let now = chrono::Utc::now();

        // Conditional decrement: losing a stock race rolls the whole
        // order back instead of overselling.
        for item in &data.items {
            let result = products::Entity::update_many()
                .col_expr(
                    products::Column::StockQuantity,
                    Expr::col(products::Column::StockQuantity).sub(item.quantity),
                )
                .col_expr(products::Column::UpdatedAt, Expr::value(now))
                .filter(products::Column::Id.eq(item.product_id))
                .filter(products::Column::Active.eq(true))
                .filter(products::Column::StockQuantity.gte(item.quantity))
                .exec(&txn)
                .await
                .map_err(Self::db_err)?;

            if result.rows_affected == 0 {
                txn.rollback().await.map_err(Self::db_err)?;
                return Err(OrderRepositoryError::InsufficientStock(item.product_id));
            }
        }

        let order = orders::ActiveModel {
            id: Set(Uuid::new_v4()),
            customer_id: Set(data.customer_id),
            vendor_id: Set(data.vendor_id),
            driver_id: Set(None),
            status: Set(OrderStatus::Pending.as_str().to_string()),
            delivery_address: Set(data.delivery_address.clone()),
            total_amount: Set(data.total_amount),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&txn)
        .await
        .map_err(Self::db_err)?;

        let mut items = Vec::with_capacity(data.items.len());
        for item in &data.items {
            let inserted = order_items::ActiveModel {
                id: Set(Uuid::new_v4()),
                order_id: Set(order.id),
                product_id: Set(item.product_id),
                product_name: Set(item.product_name.clone()),
                quantity: Set(item.quantity),
                unit_price: Set(item.unit_price),
                line_total: Set(item.line_total),
            }
            .insert(&txn)
            .await
            .map_err(Self::db_err)?;
            items.push(inserted.to_record());
        }

        payments::ActiveModel {
            id: Set(Uuid::new_v4()),
            order_id: Set(order.id),
            method: Set(data.payment_method.as_str().to_string()),
            status: Set(PaymentStatus::Pending.as_str().to_string()),
            tx_ref: Set(None),
            paid_at: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&txn)
        .await
        .map_err(Self::db_err)?;

        txn.commit().await.map_err(Self::db_err)?;

        Ok(OrderWithItems {
            order: Self::to_record(order)?,
            items,
        })
    }

    async fn find_by_id(&self, order_id: Uuid) -> Result<OrderRecord, OrderRepositoryError> {
        let model = orders::Entity::find_by_id(order_id)
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?
            .ok_or(OrderRepositoryError::NotFound)?;

        Self::to_record(model)
    }

    async fn find_with_items(
        &self,
        order_id: Uuid,
    ) -> Result<OrderWithItems, OrderRepositoryError> {
        let model = orders::Entity::find_by_id(order_id)
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?
            .ok_or(OrderRepositoryError::NotFound)?;

        let items = order_items::Entity::find()
            .filter(order_items::Column::OrderId.eq(order_id))
            .all(&*self.db)
            .await
            .map_err(Self::db_err)?;

        Ok(OrderWithItems {
            order: Self::to_record(model)?,
            items: items.iter().map(order_items::Model::to_record).collect(),
        })
    }

    async fn set_status(
        &self,
        order_id: Uuid,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<OrderRecord, OrderRepositoryError> {
        // Conditional write: the transition was checked against a
        // snapshot, so the update only lands while the row still holds
        // `from`. A concurrent writer matches zero rows here.
        let result = orders::Entity::update_many()
            .col_expr(orders::Column::Status, Expr::value(to.as_str()))
            .col_expr(orders::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(orders::Column::Id.eq(order_id))
            .filter(orders::Column::Status.eq(from.as_str()))
            .exec(&*self.db)
            .await
            .map_err(Self::db_err)?;

        if result.rows_affected == 0 {
            return Err(OrderRepositoryError::StaleStatus(from));
        }

        self.find_by_id(order_id).await
    }

    async fn assign_driver(
        &self,
        order_id: Uuid,
        driver_id: Uuid,
    ) -> Result<OrderRecord, OrderRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::db_err)?;

        // Conditional flip: a driver grabbed by a concurrent assignment
        // is no longer available, so this update matches zero rows.
        let flipped = drivers::Entity::update_many()
            .col_expr(
                drivers::Column::Availability,
                Expr::value(DriverAvailability::Busy.as_str()),
            )
            .col_expr(drivers::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(drivers::Column::Id.eq(driver_id))
            .filter(drivers::Column::Availability.eq(DriverAvailability::Available.as_str()))
            .exec(&txn)
            .await
            .map_err(Self::db_err)?;

        if flipped.rows_affected == 0 {
            txn.rollback().await.map_err(Self::db_err)?;
            return Err(OrderRepositoryError::DriverUnavailable);
        }

        // Same treatment for the order: if it left `accepted` while the
        // vendor was choosing a driver, the whole assignment rolls back
        // and the driver stays available.
        let updated = orders::Entity::update_many()
            .col_expr(orders::Column::DriverId, Expr::value(Some(driver_id)))
            .col_expr(
                orders::Column::Status,
                Expr::value(OrderStatus::Assigned.as_str()),
            )
            .col_expr(orders::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(orders::Column::Id.eq(order_id))
            .filter(orders::Column::Status.eq(OrderStatus::Accepted.as_str()))
            .exec(&txn)
            .await
            .map_err(Self::db_err)?;

        if updated.rows_affected == 0 {
            txn.rollback().await.map_err(Self::db_err)?;
            return Err(OrderRepositoryError::StaleStatus(OrderStatus::Accepted));
        }

        let model = Self::find_model_in(&txn, order_id).await?;
        txn.commit().await.map_err(Self::db_err)?;
        Self::to_record(model)
    }

    async fn deliver(
        &self,
        order_id: Uuid,
        driver_id: Uuid,
        settle_cod: bool,
    ) -> Result<OrderRecord, OrderRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::db_err)?;
        let now = chrono::Utc::now();

        // Only an order still in transit can be delivered; anything else
        // raced us and the settlement must not run.
        let updated = orders::Entity::update_many()
            .col_expr(
                orders::Column::Status,
                Expr::value(OrderStatus::Delivered.as_str()),
            )
            .col_expr(orders::Column::UpdatedAt, Expr::value(now))
            .filter(orders::Column::Id.eq(order_id))
            .filter(orders::Column::Status.eq(OrderStatus::InTransit.as_str()))
            .exec(&txn)
            .await
            .map_err(Self::db_err)?;

        if updated.rows_affected == 0 {
            txn.rollback().await.map_err(Self::db_err)?;
            return Err(OrderRepositoryError::StaleStatus(OrderStatus::InTransit));
        }

        drivers::Entity::update_many()
            .col_expr(
                drivers::Column::Availability,
                Expr::value(DriverAvailability::Available.as_str()),
            )
            .col_expr(drivers::Column::UpdatedAt, Expr::value(now))
            .filter(drivers::Column::Id.eq(driver_id))
            .exec(&txn)
            .await
            .map_err(Self::db_err)?;

        if settle_cod {
            payments::Entity::update_many()
                .col_expr(
                    payments::Column::Status,
                    Expr::value(PaymentStatus::Paid.as_str()),
                )
                .col_expr(payments::Column::PaidAt, Expr::value(Some(now)))
                .col_expr(payments::Column::UpdatedAt, Expr::value(now))
                .filter(payments::Column::OrderId.eq(order_id))
                .filter(payments::Column::Status.eq(PaymentStatus::Pending.as_str()))
                .exec(&txn)
                .await
                .map_err(Self::db_err)?;
        }

        let model = Self::find_model_in(&txn, order_id).await?;
        txn.commit().await.map_err(Self::db_err)?;
        Self::to_record(model)
    }

    async fn cancel(
        &self,
        order_id: Uuid,
        from: OrderStatus,
    ) -> Result<OrderRecord, OrderRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::db_err)?;
        let now = chrono::Utc::now();

        // The status write is conditional on `from`; a raced accept or
        // assignment matches zero rows, so a live order is never flipped
        // to cancelled and stock is never restocked for it.
        let updated = orders::Entity::update_many()
            .col_expr(
                orders::Column::Status,
                Expr::value(OrderStatus::Cancelled.as_str()),
            )
            .col_expr(orders::Column::UpdatedAt, Expr::value(now))
            .filter(orders::Column::Id.eq(order_id))
            .filter(orders::Column::Status.eq(from.as_str()))
            .exec(&txn)
            .await
            .map_err(Self::db_err)?;

        if updated.rows_affected == 0 {
            txn.rollback().await.map_err(Self::db_err)?;
            return Err(OrderRepositoryError::StaleStatus(from));
        }

        let items = order_items::Entity::find()
            .filter(order_items::Column::OrderId.eq(order_id))
            .all(&txn)
            .await
            .map_err(Self::db_err)?;

        for item in items {
            products::Entity::update_many()
                .col_expr(
                    products::Column::StockQuantity,
                    Expr::col(products::Column::StockQuantity).add(item.quantity),
                )
                .col_expr(products::Column::UpdatedAt, Expr::value(now))
                .filter(products::Column::Id.eq(item.product_id))
                .exec(&txn)
                .await
                .map_err(Self::db_err)?;
        }

        let model = Self::find_model_in(&txn, order_id).await?;
        txn.commit().await.map_err(Self::db_err)?;
        Self::to_record(model)
    }

    async fn list_for_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<OrderRecord>, OrderRepositoryError> {
        let rows = orders::Entity::find()
            .filter(orders::Column::CustomerId.eq(customer_id))
            .order_by_desc(orders::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::db_err)?;

        rows.into_iter().map(Self::to_record).collect()
    }

    async fn list_for_vendor(
        &self,
        vendor_id: Uuid,
    ) -> Result<Vec<OrderRecord>, OrderRepositoryError> {
        let rows = orders::Entity::find()
            .filter(orders::Column::VendorId.eq(vendor_id))
            .order_by_desc(orders::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::db_err)?;

        rows.into_iter().map(Self::to_record).collect()
    }

    async fn list_for_driver(
        &self,
        driver_id: Uuid,
    ) -> Result<Vec<OrderRecord>, OrderRepositoryError> {
        let rows = orders::Entity::find()
            .filter(orders::Column::DriverId.eq(driver_id))
            .order_by_desc(orders::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::db_err)?;

        rows.into_iter().map(Self::to_record).collect()
    }

    async fn add_review(&self, data: ReviewData) -> Result<(), OrderRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::db_err)?;

        // The unique index on order_id backs this check against races.
        let existing = reviews::Entity::find()
            .filter(reviews::Column::OrderId.eq(data.order_id))
            .one(&txn)
            .await
            .map_err(Self::db_err)?;
        if existing.is_some() {
            txn.rollback().await.map_err(Self::db_err)?;
            return Err(OrderRepositoryError::AlreadyReviewed);
        }

        reviews::ActiveModel {
            id: Set(Uuid::new_v4()),
            order_id: Set(data.order_id),
            customer_id: Set(data.customer_id),
            vendor_id: Set(data.vendor_id),
            driver_id: Set(data.driver_id),
            vendor_rating: Set(data.vendor_rating),
            driver_rating: Set(data.driver_rating),
            comment: Set(data.comment.clone()),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(&txn)
        .await
        .map_err(|e| match e.sql_err() {
            // Raced past the check above into the unique index.
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                OrderRepositoryError::AlreadyReviewed
            }
            _ => Self::db_err(e),
        })?;

        let vendor = vendors::Entity::find_by_id(data.vendor_id)
            .one(&txn)
            .await
            .map_err(Self::db_err)?
            .ok_or(OrderRepositoryError::NotFound)?;
        let (avg, count) =
            Self::fold_rating(vendor.rating_avg, vendor.rating_count, data.vendor_rating);
        let mut active: vendors::ActiveModel = vendor.into();
        active.rating_avg = Set(avg);
        active.rating_count = Set(count);
        active.update(&txn).await.map_err(Self::db_err)?;

        if let (Some(driver_id), Some(rating)) = (data.driver_id, data.driver_rating) {
            let driver = drivers::Entity::find_by_id(driver_id)
                .one(&txn)
                .await
                .map_err(Self::db_err)?
                .ok_or(OrderRepositoryError::NotFound)?;
            let (avg, count) = Self::fold_rating(driver.rating_avg, driver.rating_count, rating);
            let mut active: drivers::ActiveModel = driver.into();
            active.rating_avg = Set(avg);
            active.rating_count = Set(count);
            active.update(&txn).await.map_err(Self::db_err)?;
        }

        txn.commit().await.map_err(Self::db_err)
    }
}
