pub mod connectivity;
pub mod delivery_service;
pub mod sync_queue;

pub use connectivity::ConnectivityMonitor;
pub use delivery_service::DeliveryService;
pub use sync_queue::PendingSyncQueue;
