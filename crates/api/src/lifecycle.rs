use crate::ApiResult;
use crate::models::RefreshOutcome;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

pub trait RefreshHandle: Send + Sync {
    fn stop(&self);
}

#[async_trait]
pub trait CatalogLifecycle: Send + Sync {
    /// Load the catalog source once and publish a new snapshot if it changed.
    async fn refresh(&self) -> ApiResult<RefreshOutcome>;

    /// Refresh periodically in the background until the handle is stopped.
    async fn start_refresh_loop(&self, interval: Duration) -> ApiResult<Arc<dyn RefreshHandle>>;
}
