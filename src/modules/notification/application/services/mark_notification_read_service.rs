use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::ports::{
    incoming::use_cases::{MarkNotificationReadError, MarkNotificationReadUseCase},
    outgoing::{NotificationRepository, NotificationRepositoryError, NotificationResult},
};

#[derive(Debug, Clone)]
pub struct MarkNotificationReadService<R>
where
    R: NotificationRepository + Send + Sync,
{
    repository: R,
}

impl<R> MarkNotificationReadService<R>
where
    R: NotificationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> MarkNotificationReadUseCase for MarkNotificationReadService<R>
where
    R: NotificationRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        notification_id: Uuid,
    ) -> Result<NotificationResult, MarkNotificationReadError> {
        self.repository
            .mark_read(user_id, notification_id)
            .await
            .map_err(|e| match e {
                NotificationRepositoryError::NotFound => MarkNotificationReadError::NotFound,
                other => MarkNotificationReadError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::application::domain::entities::NotificationKind;
    use crate::notification::application::ports::outgoing::CreateNotificationData;

    struct MockRepo {
        result: Result<(), NotificationRepositoryError>,
    }

    #[async_trait]
    impl NotificationRepository for MockRepo {
        async fn insert(
            &self,
            _: CreateNotificationData,
        ) -> Result<NotificationResult, NotificationRepositoryError> {
            unimplemented!()
        }

        async fn list_for_user(
            &self,
            _: Uuid,
            _: bool,
        ) -> Result<Vec<NotificationResult>, NotificationRepositoryError> {
            unimplemented!()
        }

        async fn mark_read(
            &self,
            user_id: Uuid,
            notification_id: Uuid,
        ) -> Result<NotificationResult, NotificationRepositoryError> {
            self.result.clone()?;
            Ok(NotificationResult {
                id: notification_id,
                user_id,
                kind: NotificationKind::OrderPlaced,
                title: "t".into(),
                body: "b".into(),
                order_id: None,
                is_read: true,
                created_at: chrono::Utc::now(),
            })
        }
    }

    #[tokio::test]
    async fn marks_own_notification_read() {
        let service = MarkNotificationReadService::new(MockRepo { result: Ok(()) });
        let result = service.execute(Uuid::new_v4(), Uuid::new_v4()).await.unwrap();
        assert!(result.is_read);
    }

    #[tokio::test]
    async fn missing_or_foreign_notification_maps_to_not_found() {
        let service = MarkNotificationReadService::new(MockRepo {
            result: Err(NotificationRepositoryError::NotFound),
        });
        let result = service.execute(Uuid::new_v4(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(MarkNotificationReadError::NotFound)));
    }
}
