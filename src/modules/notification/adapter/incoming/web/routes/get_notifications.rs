use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::notification::application::ports::incoming::use_cases::ListNotificationsError;
use crate::notification::application::ports::outgoing::NotificationResult;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, IntoParams)]
pub struct ListNotificationsQuery {
    /// Restrict to unread notifications
    #[serde(default)]
    pub unread_only: bool,
}

#[derive(Serialize, ToSchema)]
pub struct NotificationView {
    /// Notification ID (UUID)
    id: String,

    /// Notification kind
    #[schema(example = "order_status_changed")]
    kind: String,

    /// Short title
    #[schema(example = "Order accepted")]
    title: String,

    /// Message body
    body: String,

    /// Related order, when the event concerns one
    order_id: Option<String>,

    /// Read flag
    is_read: bool,

    /// Creation timestamp (RFC 3339)
    created_at: String,
}

impl From<NotificationResult> for NotificationView {
    fn from(n: NotificationResult) -> Self {
        Self {
            id: n.id.to_string(),
            kind: n.kind.as_str().to_string(),
            title: n.title,
            body: n.body,
            order_id: n.order_id.map(|id| id.to_string()),
            is_read: n.is_read,
            created_at: n.created_at.to_rfc3339(),
        }
    }
}

/// List the caller's notifications, newest first
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = "notification",
    params(ListNotificationsQuery),
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "Notifications for the authenticated user",
            body = inline(SuccessResponse<Vec<NotificationView>>),
        ),
        (
            status = 401,
            description = "Missing or invalid access token",
            body = ErrorResponse,
        ),
    )
)]
#[get("/api/notifications")]
pub async fn get_notifications_handler(
    user: AuthenticatedUser,
    query: web::Query<ListNotificationsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.notification_use_cases.list;

    match use_case.execute(user.user_id, query.unread_only).await {
        Ok(notifications) => ApiResponse::success(
            notifications
                .into_iter()
                .map(NotificationView::from)
                .collect::<Vec<_>>(),
        ),

        Err(ListNotificationsError::RepositoryError(ref e)) => {
            error!(error = %e, "Notification listing failed");
            ApiResponse::internal_error()
        }
    }
}
