//! Composition root: constructs the collaborator adapters and injects them
//! into the services. Nothing in the crate reaches for ambient state; every
//! dependency flows through here.

use crate::application::ports::{ConnectivityEvent, ConnectivitySource};
use crate::application::services::{ConnectivityMonitor, DeliveryService, PendingSyncQueue};
use crate::infrastructure::device::{ConnectivityFeed, SimulatedCamera, SimulatedGps};
use crate::infrastructure::storage::SqliteSnapshotStore;
use crate::shared::config::AppConfig;
use crate::shared::error::Result;
use std::sync::Arc;
use tracing::info;

/// Handles to the simulated device adapters, for the embedding shell to
/// drive (supply photos, move the GPS fix, toggle network state).
pub struct Devices {
    pub camera: Arc<SimulatedCamera>,
    pub gps: Arc<SimulatedGps>,
    pub network: Arc<ConnectivityFeed>,
}

pub struct AppState {
    pub delivery: Arc<DeliveryService>,
    pub connectivity: Arc<ConnectivityMonitor>,
    pub devices: Devices,
}

impl AppState {
    pub async fn initialize(config: &AppConfig) -> Result<Self> {
        let store = Arc::new(
            SqliteSnapshotStore::initialize(&config.database.url, config.database.max_connections)
                .await?,
        );

        let camera = Arc::new(SimulatedCamera::new());
        let gps = Arc::new(SimulatedGps::new());
        // The simulated platform starts connected.
        let (network, events) = ConnectivityFeed::new(true);

        let pending = Arc::new(PendingSyncQueue::new());
        let online = network.is_online().await?;
        let monitor = Arc::new(ConnectivityMonitor::new(online, pending.clone()));
        tokio::spawn(monitor.clone().run(events));

        let delivery = Arc::new(
            DeliveryService::hydrate(
                store,
                camera.clone(),
                gps.clone(),
                pending,
                monitor.clone(),
                config.delivery.clone(),
            )
            .await?,
        );

        info!("Application state initialized");
        Ok(Self {
            delivery,
            connectivity: monitor,
            devices: Devices {
                camera,
                gps,
                network,
            },
        })
    }

    /// Applies a connectivity change and waits for the monitor to settle,
    /// so a caller observes the flush (or lack of it) deterministically.
    /// The spawned pump sees the same event later; edge-triggered handling
    /// makes the duplicate a no-op.
    pub async fn set_connectivity(&self, online: bool) {
        self.devices.network.set_online(online);
        let event = if online {
            ConnectivityEvent::Online
        } else {
            ConnectivityEvent::Offline
        };
        self.connectivity.handle(event).await;
    }
}
