use crate::domain::value_objects::GeoPoint;
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Device positioning boundary. An error here never aborts a delivery
/// confirmation; the caller substitutes `GeoPoint::FALLBACK`.
#[async_trait]
pub trait GeoLocator: Send + Sync {
    async fn locate(&self) -> Result<GeoPoint, AppError>;
}
