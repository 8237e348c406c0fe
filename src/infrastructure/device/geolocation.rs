use crate::application::ports::GeoLocator;
use crate::domain::value_objects::GeoPoint;
use crate::shared::error::{AppError, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Stand-in for device positioning. Without a fix set, `locate` fails the
/// way a denied location permission would.
#[derive(Default)]
pub struct SimulatedGps {
    fix: Mutex<Option<GeoPoint>>,
}

impl SimulatedGps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fix(&self, point: GeoPoint) {
        *self.fix.lock().unwrap() = Some(point);
    }

    pub fn clear_fix(&self) {
        *self.fix.lock().unwrap() = None;
    }
}

#[async_trait]
impl GeoLocator for SimulatedGps {
    async fn locate(&self) -> Result<GeoPoint> {
        self.fix
            .lock()
            .unwrap()
            .ok_or_else(|| AppError::Device("No position fix available".to_string()))
    }
}
