use crate::domain::entities::{ActivityLog, Agent, Order};
use crate::shared::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Everything the app persists between runs: the order collection, the
/// activity feed, and the agent record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub orders: Vec<Order>,
    pub activity: ActivityLog,
    pub agent: Agent,
}

/// Best-effort local persistence. Load happens once at startup; save runs
/// after every mutation and is allowed to fail without blocking the
/// in-memory state.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn load(&self) -> Result<Option<Snapshot>, AppError>;
    async fn save(&self, snapshot: &Snapshot) -> Result<(), AppError>;
}
