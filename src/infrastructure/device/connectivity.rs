use crate::application::ports::{ConnectivityEvent, ConnectivitySource};
use crate::shared::error::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Stand-in for the platform connectivity signal. Exposes the current state
/// as a probe and pushes edge events into the channel the monitor consumes.
pub struct ConnectivityFeed {
    online: AtomicBool,
    events: mpsc::UnboundedSender<ConnectivityEvent>,
}

impl ConnectivityFeed {
    pub fn new(
        initially_online: bool,
    ) -> (Arc<Self>, mpsc::UnboundedReceiver<ConnectivityEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let feed = Arc::new(Self {
            online: AtomicBool::new(initially_online),
            events: tx,
        });
        (feed, rx)
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
        let event = if online {
            ConnectivityEvent::Online
        } else {
            ConnectivityEvent::Offline
        };
        // The receiver may already be gone during shutdown.
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl ConnectivitySource for ConnectivityFeed {
    async fn is_online(&self) -> Result<bool> {
        Ok(self.online.load(Ordering::SeqCst))
    }
}
