use super::*;
use crate::engine::CatalogSnapshotBuilder;
use crate::error::MirrorError;
use crate::loader::LoadOutcome;
use aurmirror_api::models::RefreshOutcome;

impl CatalogEngine {
    /// Load the source and publish a freshly built snapshot.
    ///
    /// Nothing shared is touched until the final `publish`, so any error on
    /// the way out leaves the current snapshot in place.
    pub async fn refresh(&self) -> Result<RefreshOutcome> {
        let _refreshing = self.refresh_lock.lock().await;
        let start = std::time::Instant::now();
        let last_modified = self.store.last_modified().await;

        let (records, last_modified) = match self.loader.load(&self.source, &last_modified).await? {
            LoadOutcome::NotModified => {
                tracing::info!("Catalog at {} not modified, keeping snapshot", self.source);
                return Ok(RefreshOutcome::Unchanged);
            }
            LoadOutcome::Loaded {
                records,
                last_modified,
            } => (records, last_modified),
        };
        let load_elapsed = start.elapsed();

        let snapshot = tokio::task::spawn_blocking(move || {
            CatalogSnapshotBuilder::from_records(records).build()
        })
        .await
        .map_err(|e| MirrorError::Internal(e.to_string()))?;

        let count = snapshot.len();
        self.store.publish(snapshot, last_modified).await;

        tracing::info!(
            records = count,
            load_ms = load_elapsed.as_millis() as u64,
            total_ms = start.elapsed().as_millis() as u64,
            "Published catalog snapshot from {}",
            self.source
        );

        Ok(RefreshOutcome::Published { records: count })
    }
}
