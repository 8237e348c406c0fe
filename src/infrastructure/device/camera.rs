use crate::application::ports::PhotoCapture;
use crate::domain::value_objects::PhotoRef;
use crate::shared::error::Result;
use async_trait::async_trait;
use std::sync::Mutex;

/// Stand-in for the device camera: the next capture returns whatever photo
/// was supplied beforehand, or `None` when nothing was (the operator
/// cancelled).
#[derive(Default)]
pub struct SimulatedCamera {
    next: Mutex<Option<PhotoRef>>,
}

impl SimulatedCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn supply(&self, photo: PhotoRef) {
        *self.next.lock().unwrap() = Some(photo);
    }
}

#[async_trait]
impl PhotoCapture for SimulatedCamera {
    async fn capture(&self) -> Result<Option<PhotoRef>> {
        Ok(self.next.lock().unwrap().take())
    }
}
