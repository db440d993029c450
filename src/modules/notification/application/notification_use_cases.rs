use std::sync::Arc;

use crate::notification::application::ports::{
    incoming::use_cases::{ListNotificationsUseCase, MarkNotificationReadUseCase},
    outgoing::RealtimeNotifier,
};

#[derive(Clone)]
pub struct NotificationUseCases {
    pub list: Arc<dyn ListNotificationsUseCase + Send + Sync>,
    pub mark_read: Arc<dyn MarkNotificationReadUseCase + Send + Sync>,
    pub realtime: Arc<dyn RealtimeNotifier>,
}
