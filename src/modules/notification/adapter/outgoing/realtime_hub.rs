use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::debug;
use uuid::Uuid;

use crate::notification::application::ports::outgoing::RealtimeNotifier;

const CHANNEL_CAPACITY: usize = 32;

/// In-process hub mapping user ids to broadcast channels. A user's channel
/// is created on first use and dropped once the last subscriber hangs up
/// and an emit finds it dead.
#[derive(Clone, Default)]
pub struct RealtimeHub {
    channels: Arc<RwLock<HashMap<Uuid, broadcast::Sender<String>>>>,
}

impl RealtimeHub {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RealtimeNotifier for RealtimeHub {
    async fn emit(&self, user_id: Uuid, payload: String) {
        let dead = {
            let channels = self.channels.read().await;
            match channels.get(&user_id) {
                // send only fails when every receiver is gone
                Some(sender) => sender.send(payload).is_err(),
                None => {
                    debug!(user_id = %user_id, "No realtime subscribers, dropping event");
                    return;
                }
            }
        };

        if dead {
            let mut channels = self.channels.write().await;
            if let Some(sender) = channels.get(&user_id) {
                if sender.receiver_count() == 0 {
                    channels.remove(&user_id);
                }
            }
        }
    }

    async fn subscribe(&self, user_id: Uuid) -> broadcast::Receiver<String> {
        let mut channels = self.channels.write().await;
        channels
            .entry(user_id)
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }
}
