pub mod list_notifications_service;
pub mod mark_notification_read_service;
pub mod publisher_service;

pub use list_notifications_service::ListNotificationsService;
pub use mark_notification_read_service::MarkNotificationReadService;
pub use publisher_service::NotificationPublisherService;
