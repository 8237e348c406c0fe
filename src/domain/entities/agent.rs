use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentStats {
    pub weekly_deliveries: u32,
    /// Success percentage, informational only; not recomputed from history.
    pub success_rate: u32,
    pub avg_time_per_delivery: String,
}

/// The operator using the app. A process-wide singleton; `is_online` flips
/// only on explicit user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub zone: String,
    pub is_online: bool,
    pub avatar_url: String,
    pub stats: AgentStats,
}

impl Agent {
    /// Flips duty status and reports the new value.
    pub fn toggle_duty(&mut self) -> bool {
        self.is_online = !self.is_online;
        self.is_online
    }
}
