use crate::shared::error::AppError;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityEvent {
    Online,
    Offline,
}

/// Platform connectivity signal. The monitor queries it once at startup;
/// after that, edge events arrive over a channel from the adapter.
#[async_trait]
pub trait ConnectivitySource: Send + Sync {
    async fn is_online(&self) -> Result<bool, AppError>;
}
