//! Entrega: offline-first order management core for a delivery agent.
//!
//! The crate keeps all order state in memory behind [`application::services::DeliveryService`],
//! persists it as a whole-state snapshot through a storage port, and tracks
//! connectivity so status changes made offline are queued for sync. Views for
//! the home, order-list, and history screens are pure functions over that
//! state in [`application::queries`].

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod seed;
pub mod shared;
pub mod state;

pub use shared::config::AppConfig;
pub use shared::error::{AppError, Result};
pub use state::AppState;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default
/// filter when set.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "entrega=debug,info".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
