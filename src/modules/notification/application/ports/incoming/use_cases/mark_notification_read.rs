use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::ports::outgoing::NotificationResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkNotificationReadError {
    #[error("Notification not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait MarkNotificationReadUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        notification_id: Uuid,
    ) -> Result<NotificationResult, MarkNotificationReadError>;
}
