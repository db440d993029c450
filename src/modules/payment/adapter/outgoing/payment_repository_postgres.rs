use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::payment::application::domain::entities::PaymentStatus;
use crate::payment::application::ports::outgoing::{
    PaymentRecord, PaymentRepository, PaymentRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity as PaymentEntity, Model};

#[derive(Clone)]
pub struct PaymentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PaymentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_model(&self, order_id: Uuid) -> Result<Model, PaymentRepositoryError> {
        PaymentEntity::find()
            .filter(Column::OrderId.eq(order_id))
            .one(&*self.db)
            .await
            .map_err(|e| PaymentRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(PaymentRepositoryError::NotFound)
    }

    fn to_record(model: Model) -> Result<PaymentRecord, PaymentRepositoryError> {
        model.to_record().ok_or_else(|| {
            PaymentRepositoryError::DatabaseError("Unknown payment method or status".to_string())
        })
    }
}

#[async_trait]
impl PaymentRepository for PaymentRepositoryPostgres {
    async fn find_by_order_id(
        &self,
        order_id: Uuid,
    ) -> Result<PaymentRecord, PaymentRepositoryError> {
        let model = self.find_model(order_id).await?;
        Self::to_record(model)
    }

    async fn mark_paid(
        &self,
        order_id: Uuid,
        tx_ref: String,
    ) -> Result<PaymentRecord, PaymentRepositoryError> {
        let found = self.find_model(order_id).await?;

        if found.status != PaymentStatus::Pending.as_str() {
            return Err(PaymentRepositoryError::NotPending);
        }

        let mut active: ActiveModel = found.into();
        active.status = Set(PaymentStatus::Paid.as_str().to_string());
        active.tx_ref = Set(Some(tx_ref));
        active.paid_at = Set(Some(chrono::Utc::now().into()));

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| PaymentRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_record(updated)
    }
}
