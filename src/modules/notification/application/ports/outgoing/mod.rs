pub mod notification_publisher;
pub mod notification_repository;
pub mod realtime_notifier;

pub use notification_publisher::{NotificationDraft, NotificationPublisher};
pub use notification_repository::{
    CreateNotificationData, NotificationRepository, NotificationRepositoryError,
    NotificationResult,
};
pub use realtime_notifier::RealtimeNotifier;
