use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::ports::{
    incoming::use_cases::{ListNotificationsError, ListNotificationsUseCase},
    outgoing::{NotificationRepository, NotificationResult},
};

#[derive(Debug, Clone)]
pub struct ListNotificationsService<R>
where
    R: NotificationRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListNotificationsService<R>
where
    R: NotificationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListNotificationsUseCase for ListNotificationsService<R>
where
    R: NotificationRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        unread_only: bool,
    ) -> Result<Vec<NotificationResult>, ListNotificationsError> {
        self.repository
            .list_for_user(user_id, unread_only)
            .await
            .map_err(|e| ListNotificationsError::RepositoryError(e.to_string()))
    }
}
