//! Snapshot builder
//!
//! The `CatalogSnapshotBuilder` collects decoded records and derives every
//! lookup structure in one pass plus one sort per sorted list. It runs off
//! the publish path; nothing here touches shared state.

use super::snapshot::{CatalogSnapshot, SnapshotInner};
use crate::index::ReverseIndex;
use aurmirror_api::models::{PackageRecord, PackageSummary};
use std::collections::HashMap;

/// Mutable snapshot builder
#[derive(Debug, Default)]
pub struct CatalogSnapshotBuilder {
    records: Vec<PackageRecord>,
}

struct NameLookups {
    by_name: HashMap<String, usize>,
    sorted_names: Vec<String>,
    sorted_base_names: Vec<String>,
    summaries: Vec<PackageSummary>,
}

impl CatalogSnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already decoded record list; order is kept as-is.
    pub fn from_records(records: Vec<PackageRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: PackageRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Build the immutable snapshot
    ///
    /// The reverse index and the name-based lookups are independent passes
    /// over the same records and run in parallel.
    pub fn build(self) -> CatalogSnapshot {
        let records = self.records;
        let start = std::time::Instant::now();

        let (reverse_index, lookups) = rayon::join(
            || ReverseIndex::build(&records),
            || Self::name_lookups(&records),
        );

        tracing::debug!(
            records = records.len(),
            names = lookups.by_name.len(),
            base_names = lookups.sorted_base_names.len(),
            reference_keys = reverse_index.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Built catalog snapshot"
        );

        CatalogSnapshot::from_inner(SnapshotInner {
            records,
            by_name: lookups.by_name,
            sorted_names: lookups.sorted_names,
            sorted_base_names: lookups.sorted_base_names,
            summaries: lookups.summaries,
            reverse_index,
        })
    }

    fn name_lookups(records: &[PackageRecord]) -> NameLookups {
        let n = records.len();
        let mut by_name = HashMap::with_capacity(n);
        let mut sorted_names = Vec::with_capacity(n);
        let mut sorted_base_names = Vec::with_capacity(n);
        let mut summaries = Vec::with_capacity(n);

        for (pos, record) in records.iter().enumerate() {
            // Last write wins on duplicate names
            by_name.insert(record.name.clone(), pos);
            sorted_names.push(record.name.clone());
            sorted_base_names.push(record.package_base.clone());
            summaries.push(record.summary());
        }

        sorted_names.sort_unstable();
        sorted_base_names.sort_unstable();
        sorted_base_names.dedup();

        NameLookups {
            by_name,
            sorted_names,
            sorted_base_names,
            summaries,
        }
    }
}

impl FromIterator<PackageRecord> for CatalogSnapshotBuilder {
    fn from_iter<I: IntoIterator<Item = PackageRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurmirror_api::models::RefCategory;

    fn record(name: &str, base: &str) -> PackageRecord {
        PackageRecord::new(name, base)
    }

    #[test]
    fn test_build_from_scratch() {
        let mut builder = CatalogSnapshotBuilder::new();
        builder.push(record("b", "b"));
        builder.push(record("a", "a"));
        let snapshot = builder.build();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.sorted_names(), ["a", "b"]);
        assert_eq!(snapshot.records()[0].name, "b");
        assert_eq!(snapshot.get("a").map(|r| r.name.as_str()), Some("a"));
    }

    #[test]
    fn test_shared_base_collapses() {
        let snapshot: CatalogSnapshot = ["python-x", "python2-x", "x-docs"]
            .into_iter()
            .map(|name| record(name, "x"))
            .collect::<CatalogSnapshotBuilder>()
            .build();

        assert_eq!(snapshot.sorted_base_names(), ["x"]);
        assert_eq!(snapshot.sorted_names().len(), 3);
    }

    #[test]
    fn test_duplicate_name_last_write_wins() {
        let mut first = record("dup", "one");
        first.version = "1".into();
        let mut second = record("dup", "two");
        second.version = "2".into();

        let snapshot = CatalogSnapshotBuilder::from_records(vec![first, second]).build();

        assert_eq!(snapshot.by_name().len(), 1);
        assert_eq!(snapshot.get("dup").unwrap().version, "2");
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_summaries_align_with_records() {
        let mut a = record("a", "a");
        a.description = Some("first".into());
        let b = record("b", "b");

        let snapshot = CatalogSnapshotBuilder::from_records(vec![a, b]).build();

        for (record, summary) in snapshot.records().iter().zip(snapshot.summaries()) {
            assert_eq!(record.name, summary.name);
            assert_eq!(record.description, summary.description);
        }
    }

    #[test]
    fn test_references_resolve_to_records() {
        let mut app = record("app", "app");
        app.depends = vec!["lib>=2".into()];
        let lib = record("lib", "lib");

        let snapshot = CatalogSnapshotBuilder::from_records(vec![lib, app]).build();

        let names: Vec<_> = snapshot
            .references(RefCategory::Depends, "lib")
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["app"]);
    }
}
