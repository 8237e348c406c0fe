//! The order store and its lifecycle operations. This service is the only
//! writer of order state; the activity log and pending-sync queue react to
//! its writes but never mutate orders themselves.

use crate::application::ports::{GeoLocator, PhotoCapture, Snapshot, SnapshotStore};
use crate::application::queries::{
    filter_orders, history_report, home_summary, HistoryReport, HomeSummary, StatusFilter,
};
use crate::application::services::{ConnectivityMonitor, PendingSyncQueue};
use crate::domain::entities::{
    ActivityEntry, ActivityLog, Agent, DeliveryProof, Order, PendingChange, StatusUpdate,
};
use crate::domain::value_objects::{FailureReason, GeoPoint, OrderId};
use crate::seed;
use crate::shared::config::DeliveryConfig;
use crate::shared::error::{AppError, Result};
use chrono::{Local, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

struct DeliveryState {
    orders: Vec<Order>,
    activity: ActivityLog,
    agent: Agent,
}

impl DeliveryState {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            orders: self.orders.clone(),
            activity: self.activity.clone(),
            agent: self.agent.clone(),
        }
    }
}

pub struct DeliveryService {
    state: RwLock<DeliveryState>,
    pending: Arc<PendingSyncQueue>,
    connectivity: Arc<ConnectivityMonitor>,
    store: Arc<dyn SnapshotStore>,
    camera: Arc<dyn PhotoCapture>,
    locator: Arc<dyn GeoLocator>,
    config: DeliveryConfig,
}

impl DeliveryService {
    /// Loads the persisted snapshot, falling back to seed data on first run
    /// (the seed is saved immediately so the next start finds it).
    pub async fn hydrate(
        store: Arc<dyn SnapshotStore>,
        camera: Arc<dyn PhotoCapture>,
        locator: Arc<dyn GeoLocator>,
        pending: Arc<PendingSyncQueue>,
        connectivity: Arc<ConnectivityMonitor>,
        config: DeliveryConfig,
    ) -> Result<Self> {
        let snapshot = match store.load().await? {
            Some(snapshot) => {
                info!("Hydrated {} order(s) from local snapshot", snapshot.orders.len());
                snapshot
            }
            None => {
                let seeded = seed::initial_snapshot(Utc::now());
                info!("No local snapshot, seeding {} order(s)", seeded.orders.len());
                if let Err(err) = store.save(&seeded).await {
                    warn!("Failed to persist seed snapshot: {}", err);
                }
                seeded
            }
        };

        Ok(Self {
            state: RwLock::new(DeliveryState {
                orders: snapshot.orders,
                activity: snapshot.activity,
                agent: snapshot.agent,
            }),
            pending,
            connectivity,
            store,
            camera,
            locator,
            config,
        })
    }

    pub async fn orders(&self) -> Vec<Order> {
        self.state.read().await.orders.clone()
    }

    pub async fn order(&self, id: &OrderId) -> Result<Order> {
        self.state
            .read()
            .await
            .orders
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Order {id} not found")))
    }

    pub async fn agent(&self) -> Agent {
        self.state.read().await.agent.clone()
    }

    pub async fn recent_activity(&self, limit: usize) -> Vec<ActivityEntry> {
        self.state.read().await.activity.recent(limit)
    }

    /// Assigned -> InTransit.
    pub async fn start_delivery(&self, id: &OrderId) -> Result<Order> {
        self.apply_update(id, StatusUpdate::StartTransit).await
    }

    /// InTransit -> Delivered. Drives the camera first (cancellation rejects
    /// the confirmation before any state change), then the locator (failure
    /// substitutes the fallback coordinate and proceeds).
    pub async fn confirm_delivery(&self, id: &OrderId) -> Result<Order> {
        let photo = self.camera.capture().await?.ok_or_else(|| {
            AppError::Validation("A proof-of-delivery photo is required".to_string())
        })?;

        let location = match self.locator.locate().await {
            Ok(point) => point,
            Err(err) => {
                warn!("Location capture failed, using fallback: {}", err);
                GeoPoint::FALLBACK
            }
        };

        let proof = DeliveryProof {
            photo,
            captured_at: Utc::now(),
            location,
            confirmed_by: self.state.read().await.agent.name.clone(),
        };

        self.apply_update(id, StatusUpdate::Deliver(proof)).await
    }

    /// InTransit -> Failed. The reason must be non-blank; notes are trimmed
    /// to `None` when empty.
    pub async fn report_failure(
        &self,
        id: &OrderId,
        reason: &str,
        notes: Option<String>,
    ) -> Result<Order> {
        let reason = FailureReason::new(reason.to_string())?;
        let notes = notes.filter(|n| !n.trim().is_empty());
        self.apply_update(id, StatusUpdate::Fail { reason, notes })
            .await
    }

    /// Single mutation path for every transition: status + payload merge,
    /// `updated_at` refresh, exactly one activity entry, and a pending-sync
    /// enqueue when offline, all before the state lock is released. The
    /// snapshot save afterwards is best-effort.
    async fn apply_update(&self, id: &OrderId, update: StatusUpdate) -> Result<Order> {
        let now = Utc::now();

        let (updated, snapshot) = {
            let mut state = self.state.write().await;
            let order = state
                .orders
                .iter_mut()
                .find(|o| &o.id == id)
                .ok_or_else(|| AppError::NotFound(format!("Order {id} not found")))?;

            order
                .apply(&update, now)
                .map_err(|err| AppError::InvalidTransition(err.to_string()))?;
            let updated = order.clone();

            let message = format!("Updated Order #{} to {}", id, updated.status);
            state
                .activity
                .record(ActivityEntry::status_change(message, id.clone(), now));

            if !self.connectivity.is_online() {
                self.pending
                    .enqueue(PendingChange::new(id.clone(), update, now))
                    .await;
            }

            (updated, state.snapshot())
        };

        info!("Updated order {} to {}", id, updated.status);
        self.persist(&snapshot).await;
        Ok(updated)
    }

    /// Flips the agent's duty status and records a system activity entry.
    pub async fn toggle_duty(&self) -> Result<Agent> {
        let now = Utc::now();
        let (agent, snapshot) = {
            let mut state = self.state.write().await;
            let online = state.agent.toggle_duty();
            let message = if online {
                "Shift started - Online"
            } else {
                "Shift ended - Offline"
            };
            state.activity.record(ActivityEntry::system(message, now));
            (state.agent.clone(), state.snapshot())
        };

        info!("Agent duty toggled: online={}", agent.is_online);
        self.persist(&snapshot).await;
        Ok(agent)
    }

    pub async fn home_summary(&self) -> HomeSummary {
        let state = self.state.read().await;
        home_summary(
            &state.orders,
            &state.activity,
            Local::now().date_naive(),
            self.config.unit_rate,
            self.config.recent_activity_limit,
        )
    }

    pub async fn list_orders(&self, filter: StatusFilter, search: &str) -> Vec<Order> {
        let state = self.state.read().await;
        filter_orders(&state.orders, filter, search)
    }

    pub async fn history(&self) -> HistoryReport {
        let state = self.state.read().await;
        history_report(&state.orders)
    }

    pub async fn pending_sync_count(&self) -> usize {
        self.pending.len().await
    }

    pub async fn is_pending_sync(&self, id: &OrderId) -> bool {
        self.pending.is_pending(id).await
    }

    async fn persist(&self, snapshot: &Snapshot) {
        if let Err(err) = self.store.save(snapshot).await {
            warn!("Failed to persist snapshot, continuing in memory: {}", err);
        }
    }
}
