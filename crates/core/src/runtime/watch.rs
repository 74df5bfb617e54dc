use super::*;
use crate::error::MirrorError;
use aurmirror_api::models::RefreshOutcome;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Handle to a running refresh loop. Dropping it does not stop the loop.
#[derive(Clone, Debug)]
pub struct RefreshLoop {
    token: CancellationToken,
}

impl RefreshLoop {
    pub fn stop(&self) {
        self.token.cancel();
    }
}

impl CatalogEngine {
    /// Refresh every `period` in the background.
    ///
    /// The first tick fires one period from now; callers load the initial
    /// snapshot themselves. Failures are logged and the loop keeps serving
    /// the previous snapshot. The task ends when the handle is stopped or
    /// the engine is dropped. A zero period is rejected.
    pub fn start_refresh_loop(self: &Arc<Self>, period: Duration) -> Result<RefreshLoop> {
        if period.is_zero() {
            return Err(MirrorError::Config(
                "refresh interval must be greater than 0".to_string(),
            ));
        }

        let token = self.cancel_token().child_token();
        let loop_token = token.clone();
        let engine_weak = Arc::downgrade(self);

        tokio::spawn(async move {
            tracing::info!("Started refresh loop (every {:?})", period);
            let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = loop_token.cancelled() => {
                        break;
                    }
                    _ = ticker.tick() => {
                        let Some(engine) = engine_weak.upgrade() else {
                            break;
                        };
                        match engine.refresh().await {
                            Ok(RefreshOutcome::Published { records }) => {
                                tracing::debug!("Scheduled refresh published {} records", records);
                            }
                            Ok(RefreshOutcome::Unchanged) => {}
                            Err(err) => {
                                tracing::error!("Failed to refresh catalog: {}", err);
                            }
                        }
                    }
                }
            }
            tracing::info!("Refresh loop ended");
        });

        Ok(RefreshLoop { token })
    }
}
