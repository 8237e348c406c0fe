pub mod camera;
pub mod connectivity;
pub mod geolocation;

pub use camera::SimulatedCamera;
pub use connectivity::ConnectivityFeed;
pub use geolocation::SimulatedGps;
