pub mod list_notifications;
pub mod mark_notification_read;

pub use list_notifications::{ListNotificationsError, ListNotificationsUseCase};
pub use mark_notification_read::{MarkNotificationReadError, MarkNotificationReadUseCase};
