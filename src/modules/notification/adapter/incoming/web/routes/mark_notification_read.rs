use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::notification::application::ports::incoming::use_cases::MarkNotificationReadError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::get_notifications::NotificationView;

/// Mark one of the caller's notifications as read
#[utoipa::path(
    patch,
    path = "/api/notifications/{id}/read",
    tag = "notification",
    params(("id" = Uuid, Path, description = "Notification ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Notification marked read"),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Notification not found", body = ErrorResponse),
    )
)]
#[patch("/api/notifications/{id}/read")]
pub async fn mark_notification_read_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.notification_use_cases.mark_read;
    let notification_id = path.into_inner();

    match use_case.execute(user.user_id, notification_id).await {
        Ok(notification) => ApiResponse::success(NotificationView::from(notification)),

        Err(MarkNotificationReadError::NotFound) => {
            ApiResponse::not_found("NOTIFICATION_NOT_FOUND", "Notification not found")
        }

        Err(MarkNotificationReadError::RepositoryError(ref e)) => {
            error!(error = %e, notification_id = %notification_id, "Mark-read failed");
            ApiResponse::internal_error()
        }
    }
}
