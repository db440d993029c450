use async_trait::async_trait;
use uuid::Uuid;

use crate::notification::application::domain::entities::NotificationKind;

/// Notification about to be delivered to one user.
#[derive(Debug, Clone)]
pub struct NotificationDraft {
    pub user_id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub order_id: Option<Uuid>,
}

impl NotificationDraft {
    pub fn order_event(
        user_id: Uuid,
        kind: NotificationKind,
        order_id: Uuid,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            kind,
            title: title.into(),
            body: body.into(),
            order_id: Some(order_id),
        }
    }
}

/// Fire-and-forget publisher used by the order, payment and account
/// services. Implementations must swallow their own failures; a missed
/// notification never fails the operation that triggered it.
#[async_trait]
pub trait NotificationPublisher: Send + Sync {
    async fn publish(&self, draft: NotificationDraft);
}
