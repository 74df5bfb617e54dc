//! Catalog mirror engine with whole-snapshot refresh

use crate::config::Settings;
use crate::engine::{CatalogSnapshot, CatalogStore};
use crate::error::Result;
use crate::loader::{CatalogLoader, CatalogSource};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

mod lifecycle;
mod watch;

pub use watch::RefreshLoop;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_MAX_RESULTS: usize = 5000;

/// Catalog mirror engine
///
/// Owns the published snapshot slot and the means to refresh it:
/// - Readers get cheap snapshots (Arc clone)
/// - A refresh loads and builds a new snapshot, then swaps it in
/// - A failed refresh leaves the published snapshot untouched
pub struct CatalogEngine {
    store: CatalogStore,

    source: CatalogSource,

    loader: CatalogLoader,

    /// Upper bound on search result counts
    max_results: usize,

    /// Serializes refresh attempts so only one download runs at a time
    refresh_lock: Mutex<()>,

    /// Cancellation token for background tasks (like the refresh loop)
    cancel_token: tokio_util::sync::CancellationToken,
}

pub struct CatalogEngineBuilder {
    source: CatalogSource,
    fetch_timeout: Duration,
    max_results: usize,
}

impl CatalogEngineBuilder {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn build(self) -> Result<CatalogEngine> {
        Ok(CatalogEngine {
            store: CatalogStore::new(),
            source: self.source,
            loader: CatalogLoader::new(self.fetch_timeout)?,
            max_results: self.max_results,
            refresh_lock: Mutex::new(()),
            cancel_token: tokio_util::sync::CancellationToken::new(),
        })
    }
}

impl Drop for CatalogEngine {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

impl CatalogEngine {
    /// Create a builder for the engine
    pub fn builder(source: CatalogSource) -> CatalogEngineBuilder {
        CatalogEngineBuilder::new(source)
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        Self::builder(settings.catalog_source()?)
            .with_fetch_timeout(settings.fetch_timeout())
            .with_max_results(settings.max_results)
            .build()
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Get the published snapshot (cheap operation)
    pub async fn snapshot(&self) -> Result<CatalogSnapshot> {
        self.store.read().await
    }

    pub(crate) fn cancel_token(&self) -> &tokio_util::sync::CancellationToken {
        &self.cancel_token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CatalogSnapshotBuilder;
    use crate::error::MirrorError;
    use aurmirror_api::models::PackageRecord;
    use std::path::PathBuf;

    fn engine() -> CatalogEngine {
        CatalogEngine::builder(CatalogSource::File(PathBuf::from("unused.json")))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_snapshot_before_load_is_not_initialized() {
        let engine = engine();
        assert!(matches!(
            engine.snapshot().await,
            Err(MirrorError::NotInitialized)
        ));
    }

    #[tokio::test]
    async fn test_snapshot_is_fast() {
        let engine = engine();
        engine.store().publish(CatalogSnapshot::empty(), "").await;

        let start = std::time::Instant::now();
        for _ in 0..1000 {
            let _snapshot = engine.snapshot().await.unwrap();
        }
        let elapsed = start.elapsed();

        assert!(elapsed.as_millis() < 100, "Snapshots should be fast");
    }

    #[tokio::test]
    async fn test_concurrent_snapshots() {
        use tokio::task::JoinSet;

        let engine = Arc::new(engine());
        let snapshot = CatalogSnapshotBuilder::from_records(vec![PackageRecord::new("a", "a")])
            .build();
        engine.store().publish(snapshot, "").await;

        let mut set = JoinSet::new();

        for _ in 0..10 {
            let e = Arc::clone(&engine);
            set.spawn(async move {
                for _ in 0..10 {
                    let snapshot = e.snapshot().await.unwrap();
                    assert_eq!(snapshot.len(), 1);
                }
            });
        }

        while let Some(result) = set.join_next().await {
            result.unwrap();
        }
    }

    #[tokio::test]
    async fn test_zero_refresh_period_rejected() {
        let engine = Arc::new(engine());
        assert!(matches!(
            engine.start_refresh_loop(Duration::ZERO),
            Err(MirrorError::Config(_))
        ));
    }

    #[test]
    fn test_from_settings_rejects_invalid() {
        let settings = Settings {
            max_results: 0,
            ..Settings::default()
        };
        assert!(CatalogEngine::from_settings(&settings).is_err());
    }
}
