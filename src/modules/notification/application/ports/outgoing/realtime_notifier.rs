use async_trait::async_trait;
use tokio::sync::broadcast;
use uuid::Uuid;

/// In-process fan-out of notification payloads to connected SSE clients.
/// Emission is best-effort: no subscribers means the payload is dropped.
#[async_trait]
pub trait RealtimeNotifier: Send + Sync {
    async fn emit(&self, user_id: Uuid, payload: String);

    async fn subscribe(&self, user_id: Uuid) -> broadcast::Receiver<String>;
}
