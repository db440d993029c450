mod get_notifications;
mod mark_notification_read;
mod stream_notifications;

pub use get_notifications::get_notifications_handler;
pub use get_notifications::__path_get_notifications_handler;
pub use mark_notification_read::mark_notification_read_handler;
pub use mark_notification_read::__path_mark_notification_read_handler;
pub use stream_notifications::stream_notifications_handler;
pub use stream_notifications::__path_stream_notifications_handler;

pub use get_notifications::NotificationView;
