use crate::domain::entities::PendingChange;
use crate::domain::value_objects::OrderId;
use tokio::sync::RwLock;
use tracing::debug;

/// Volatile queue of status changes made while offline. Entries are never
/// deduplicated and never transmitted; reconnecting discards the lot. A
/// real outbox could replace this without touching the state machine.
#[derive(Debug, Default)]
pub struct PendingSyncQueue {
    entries: RwLock<Vec<PendingChange>>,
}

impl PendingSyncQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn enqueue(&self, change: PendingChange) {
        debug!(
            "Queued offline change for order {} -> {}",
            change.order_id,
            change.target_status()
        );
        self.entries.write().await.push(change);
    }

    /// True iff any queued entry references the order.
    pub async fn is_pending(&self, order_id: &OrderId) -> bool {
        self.entries
            .read()
            .await
            .iter()
            .any(|c| &c.order_id == order_id)
    }

    /// Number of queued entries, for UI badges.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drops every entry. This is the whole "sync attempt": there is no
    /// transmission step and no partial retry.
    pub async fn flush(&self) -> usize {
        let mut entries = self.entries.write().await;
        let discarded = entries.len();
        entries.clear();
        discarded
    }
}
