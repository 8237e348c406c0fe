use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub delivery: DeliveryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Flat payout per completed delivery, in XOF.
    pub unit_rate: u32,
    /// How many entries the home screen surfaces from the activity log.
    pub recent_activity_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite:data/entrega.db?mode=rwc".to_string(),
                max_connections: 5,
            },
            delivery: DeliveryConfig {
                unit_rate: 1500,
                recent_activity_limit: 5,
            },
        }
    }
}
