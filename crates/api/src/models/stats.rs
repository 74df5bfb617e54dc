use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reporting view of the published catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStats {
    pub record_count: usize,
    /// Freshness marker of the source (HTTP `Last-Modified`). Empty for file sources.
    pub last_modified: String,
    pub last_refresh: DateTime<Utc>,
}

impl CatalogStats {
    /// The marker if the source provided one, otherwise the local refresh time.
    pub fn refreshed_display(&self) -> String {
        if self.last_modified.is_empty() {
            self.last_refresh
                .format("%Y-%m-%d - %H:%M:%S (UTC)")
                .to_string()
        } else {
            self.last_modified.clone()
        }
    }
}

impl fmt::Display for CatalogStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "last refresh:\t\t{}", self.refreshed_display())?;
        write!(f, "number of packages:\t{}", self.record_count)
    }
}

/// Result of a single refresh attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum RefreshOutcome {
    /// A new snapshot was built and published.
    Published { records: usize },
    /// The source reported no change; the current snapshot was kept.
    Unchanged,
}
