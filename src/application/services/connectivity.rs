use crate::application::ports::ConnectivityEvent;
use crate::application::services::PendingSyncQueue;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// Tracks the binary online/offline state and flushes the pending queue on
/// the offline-to-online edge. No debounce, no backoff.
pub struct ConnectivityMonitor {
    online: AtomicBool,
    queue: Arc<PendingSyncQueue>,
}

impl ConnectivityMonitor {
    pub fn new(initially_online: bool, queue: Arc<PendingSyncQueue>) -> Self {
        Self {
            online: AtomicBool::new(initially_online),
            queue,
        }
    }

    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    /// Edge-triggered: a repeated event in the current state does nothing.
    pub async fn handle(&self, event: ConnectivityEvent) {
        match event {
            ConnectivityEvent::Online => {
                if !self.online.swap(true, Ordering::SeqCst) {
                    let discarded = self.queue.flush().await;
                    info!("Back online, discarded {} queued update(s)", discarded);
                }
            }
            ConnectivityEvent::Offline => {
                if self.online.swap(false, Ordering::SeqCst) {
                    info!("Connectivity lost, queueing further updates");
                }
            }
        }
    }

    /// Consumes platform connectivity events until the sender side closes.
    pub async fn run(self: Arc<Self>, mut events: mpsc::UnboundedReceiver<ConnectivityEvent>) {
        while let Some(event) = events.recv().await {
            self.handle(event).await;
        }
    }
}
