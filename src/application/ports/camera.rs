use crate::domain::value_objects::PhotoRef;
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Device camera boundary. `Ok(None)` means the operator cancelled the
/// capture; the caller treats that as a missing-photo precondition failure.
#[async_trait]
pub trait PhotoCapture: Send + Sync {
    async fn capture(&self) -> Result<Option<PhotoRef>, AppError>;
}
