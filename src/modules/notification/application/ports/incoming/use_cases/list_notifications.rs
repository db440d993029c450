use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::ports::outgoing::NotificationResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListNotificationsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListNotificationsUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        unread_only: bool,
    ) -> Result<Vec<NotificationResult>, ListNotificationsError>;
}
