use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::notification::application::ports::outgoing::{
    CreateNotificationData, NotificationDraft, NotificationPublisher, NotificationRepository,
    RealtimeNotifier,
};

/// Persists the notification, then pushes it to any connected SSE clients.
/// Both steps are best-effort: failures are logged and swallowed so the
/// triggering operation never sees them.
pub struct NotificationPublisherService<R>
where
    R: NotificationRepository + Send + Sync,
{
    repository: R,
    realtime: Arc<dyn RealtimeNotifier>,
}

impl<R> NotificationPublisherService<R>
where
    R: NotificationRepository + Send + Sync,
{
    pub fn new(repository: R, realtime: Arc<dyn RealtimeNotifier>) -> Self {
        Self {
            repository,
            realtime,
        }
    }
}

#[async_trait]
impl<R> NotificationPublisher for NotificationPublisherService<R>
where
    R: NotificationRepository + Send + Sync,
{
    async fn publish(&self, draft: NotificationDraft) {
        let user_id = draft.user_id;
        let data = CreateNotificationData {
            user_id: draft.user_id,
            kind: draft.kind,
            title: draft.title,
            body: draft.body,
            order_id: draft.order_id,
        };

        let stored = match self.repository.insert(data).await {
            Ok(stored) => stored,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Notification insert failed");
                return;
            }
        };

        match serde_json::to_string(&stored) {
            Ok(payload) => self.realtime.emit(user_id, payload).await,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Notification payload serialization failed");
            }
        }
    }
}
