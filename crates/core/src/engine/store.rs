//! Catalog store
//!
//! One guarded slot holding the published snapshot and its reporting
//! metadata. Readers take the read lock only long enough to clone the
//! snapshot handle; `publish` takes the write lock only for the swap.
//! Snapshots are built before `publish` is called, never under the lock.

use super::CatalogSnapshot;
use crate::error::{MirrorError, Result};
use aurmirror_api::models::CatalogStats;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug)]
struct Published {
    snapshot: CatalogSnapshot,
    last_modified: String,
    last_refresh: DateTime<Utc>,
}

/// Shared store; clones refer to the same slot.
#[derive(Clone, Debug, Default)]
pub struct CatalogStore {
    current: Arc<RwLock<Option<Published>>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the published snapshot, or `NotInitialized` before the
    /// first publish.
    pub async fn read(&self) -> Result<CatalogSnapshot> {
        let lock = self.current.read().await;
        lock.as_ref()
            .map(|published| published.snapshot.clone())
            .ok_or(MirrorError::NotInitialized)
    }

    /// Replace the published snapshot. The previous one is dropped by the
    /// store here and lives on only in readers still holding it.
    pub async fn publish(&self, snapshot: CatalogSnapshot, last_modified: impl Into<String>) {
        let published = Published {
            snapshot,
            last_modified: last_modified.into(),
            last_refresh: Utc::now(),
        };

        let previous = {
            let mut lock = self.current.write().await;
            lock.replace(published)
        };
        // Release our reference to the old generation outside the lock.
        drop(previous);
    }

    /// Freshness marker of the published snapshot; empty when none.
    pub async fn last_modified(&self) -> String {
        let lock = self.current.read().await;
        lock.as_ref()
            .map(|published| published.last_modified.clone())
            .unwrap_or_default()
    }

    pub async fn is_initialized(&self) -> bool {
        self.current.read().await.is_some()
    }

    pub async fn stats(&self) -> Result<CatalogStats> {
        let lock = self.current.read().await;
        let published = lock.as_ref().ok_or(MirrorError::NotInitialized)?;
        Ok(CatalogStats {
            record_count: published.snapshot.len(),
            last_modified: published.last_modified.clone(),
            last_refresh: published.last_refresh,
        })
    }
}
