pub mod ports;
pub mod queries;
pub mod services;

pub use services::{ConnectivityMonitor, DeliveryService, PendingSyncQueue};
