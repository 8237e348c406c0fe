pub mod camera;
pub mod connectivity;
pub mod geolocation;
pub mod snapshot_store;

pub use camera::PhotoCapture;
pub use connectivity::{ConnectivityEvent, ConnectivitySource};
pub use geolocation::GeoLocator;
pub use snapshot_store::{Snapshot, SnapshotStore};
