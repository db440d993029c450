use serde::{Deserialize, Serialize};

/// What a notification is about. Stored as a short string so new kinds can
/// be added without a schema change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    OrderPlaced,
    OrderStatusChanged,
    AccountModerated,
    PaymentSettled,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::OrderPlaced => "order_placed",
            NotificationKind::OrderStatusChanged => "order_status_changed",
            NotificationKind::AccountModerated => "account_moderated",
            NotificationKind::PaymentSettled => "payment_settled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "order_placed" => Some(NotificationKind::OrderPlaced),
            "order_status_changed" => Some(NotificationKind::OrderStatusChanged),
            "account_moderated" => Some(NotificationKind::AccountModerated),
            "payment_settled" => Some(NotificationKind::PaymentSettled),
            _ => None,
        }
    }
}
