use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::AppState;
use actix_web::http::header;
use actix_web::{get, web, HttpResponse, Responder};
use tokio::sync::broadcast;
use tracing::debug;

/// Server-Sent-Events stream of the caller's realtime notifications
///
/// Each event's data is the same JSON document the REST listing returns.
/// Slow consumers that fall behind the channel capacity miss the lagged
/// events and keep receiving from the current position.
#[utoipa::path(
    get,
    path = "/api/notifications/stream",
    tag = "notification",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "text/event-stream of notification events"),
        (status = 401, description = "Missing or invalid access token"),
    )
)]
#[get("/api/notifications/stream")]
pub async fn stream_notifications_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let rx = data
        .notification_use_cases
        .realtime
        .subscribe(user.user_id)
        .await;

    debug!(user_id = %user.user_id, "SSE subscriber connected");

    let stream = futures::stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(payload) => {
                    let frame = web::Bytes::from(format!("data: {}\n\n", payload));
                    return Some((Ok::<_, actix_web::Error>(frame), rx));
                }
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    });

    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/event-stream"))
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(stream)
}
