use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::notification::application::domain::entities::NotificationKind;

#[derive(Debug, Clone)]
pub struct CreateNotificationData {
    pub user_id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub order_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResult {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub order_id: Option<Uuid>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationRepositoryError {
    #[error("Notification not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn insert(
        &self,
        data: CreateNotificationData,
    ) -> Result<NotificationResult, NotificationRepositoryError>;

    /// Newest first. `unread_only` narrows to unread entries.
    async fn list_for_user(
        &self,
        user_id: Uuid,
        unread_only: bool,
    ) -> Result<Vec<NotificationResult>, NotificationRepositoryError>;

    /// Marks one of the user's own notifications read. NotFound covers both
    /// a missing row and a row belonging to someone else.
    async fn mark_read(
        &self,
        user_id: Uuid,
        notification_id: Uuid,
    ) -> Result<NotificationResult, NotificationRepositoryError>;
}
