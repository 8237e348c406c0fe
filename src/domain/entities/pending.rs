use crate::domain::entities::order::StatusUpdate;
use crate::domain::value_objects::{OrderId, OrderStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A status change made while offline, waiting for a sync attempt. Lives
/// only in the volatile pending queue; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingChange {
    pub order_id: OrderId,
    pub update: StatusUpdate,
    pub queued_at: DateTime<Utc>,
}

impl PendingChange {
    pub fn new(order_id: OrderId, update: StatusUpdate, queued_at: DateTime<Utc>) -> Self {
        Self {
            order_id,
            update,
            queued_at,
        }
    }

    pub fn target_status(&self) -> OrderStatus {
        self.update.target_status()
    }
}
