use crate::domain::value_objects::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Retention limit for the activity feed.
pub const ACTIVITY_LOG_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    StatusChange,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub kind: ActivityKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub order_id: Option<OrderId>,
}

impl ActivityEntry {
    pub fn status_change(
        message: impl Into<String>,
        order_id: OrderId,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("LOG-{}", Uuid::new_v4()),
            kind: ActivityKind::StatusChange,
            message: message.into(),
            timestamp,
            order_id: Some(order_id),
        }
    }

    pub fn system(message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: format!("LOG-{}", Uuid::new_v4()),
            kind: ActivityKind::System,
            message: message.into(),
            timestamp,
            order_id: None,
        }
    }
}

/// Fixed-capacity, recency-ordered ring over the activity feed. Newest
/// entries sit at the front; recording past capacity drops the oldest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(ACTIVITY_LOG_CAPACITY),
        }
    }

    pub fn from_entries(entries: Vec<ActivityEntry>) -> Self {
        let mut log = Self::new();
        for entry in entries.into_iter().rev() {
            log.record(entry);
        }
        log
    }

    pub fn record(&mut self, entry: ActivityEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > ACTIVITY_LOG_CAPACITY {
            self.entries.pop_back();
        }
    }

    /// Newest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    pub fn recent(&self, limit: usize) -> Vec<ActivityEntry> {
        self.entries.iter().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
