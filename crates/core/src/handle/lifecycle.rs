use super::{EngineHandle, to_api_error};
use crate::error::MirrorError;
use crate::runtime::RefreshLoop;
use async_trait::async_trait;
use aurmirror_api::models::RefreshOutcome;
use aurmirror_api::{ApiError, ApiResult, CatalogLifecycle, RefreshHandle};
use std::sync::Arc;
use std::time::Duration;

impl RefreshHandle for RefreshLoop {
    fn stop(&self) {
        RefreshLoop::stop(self);
    }
}

#[async_trait]
impl CatalogLifecycle for EngineHandle {
    async fn refresh(&self) -> ApiResult<RefreshOutcome> {
        self.engine.refresh().await.map_err(to_api_error)
    }

    async fn start_refresh_loop(&self, interval: Duration) -> ApiResult<Arc<dyn RefreshHandle>> {
        let handle = self
            .engine
            .start_refresh_loop(interval)
            .map_err(|err| match err {
                MirrorError::Config(msg) => ApiError::InvalidArgument(msg),
                other => to_api_error(other),
            })?;
        Ok(Arc::new(handle))
    }
}
