use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::notification::application::ports::outgoing::{
    CreateNotificationData, NotificationRepository, NotificationRepositoryError,
    NotificationResult,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity as NotificationEntity, Model};

#[derive(Clone)]
pub struct NotificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NotificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map(model: Model) -> Result<NotificationResult, NotificationRepositoryError> {
        model.to_result().ok_or_else(|| {
            NotificationRepositoryError::DatabaseError(format!(
                "unknown notification kind '{}'",
                model.kind
            ))
        })
    }
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryPostgres {
    async fn insert(
        &self,
        data: CreateNotificationData,
    ) -> Result<NotificationResult, NotificationRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id),
            kind: Set(data.kind.as_str().to_string()),
            title: Set(data.title),
            body: Set(data.body),
            order_id: Set(data.order_id),
            is_read: Set(false),
            created_at: NotSet,
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        Self::map(inserted)
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        unread_only: bool,
    ) -> Result<Vec<NotificationResult>, NotificationRepositoryError> {
        let mut query = NotificationEntity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt);

        if unread_only {
            query = query.filter(Column::IsRead.eq(false));
        }

        let rows = query
            .all(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::map).collect()
    }

    async fn mark_read(
        &self,
        user_id: Uuid,
        notification_id: Uuid,
    ) -> Result<NotificationResult, NotificationRepositoryError> {
        let found = NotificationEntity::find_by_id(notification_id)
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(NotificationRepositoryError::NotFound)?;

        if found.is_read {
            return Self::map(found);
        }

        let mut active: ActiveModel = found.into();
        active.is_read = Set(true);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        Self::map(updated)
    }
}
