//! Arc-wrapped immutable catalog snapshot
//!
//! The `CatalogSnapshot` is the unit of publication. All derived structures
//! live next to the record list they were built from and are wrapped in a
//! single `Arc`, so cloning a snapshot only increments a reference counter
//! and a reader holding one keeps that whole generation alive.

use crate::index::ReverseIndex;
use aurmirror_api::models::{PackageRecord, PackageSummary, RefCategory};
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable catalog snapshot (cheap to clone via Arc)
#[derive(Clone, Debug)]
pub struct CatalogSnapshot {
    inner: Arc<SnapshotInner>,
}

/// Internal data structure (shared via Arc)
#[derive(Debug)]
pub(crate) struct SnapshotInner {
    /// Owning record list, in source order. Every other structure refers
    /// into it by position.
    pub records: Vec<PackageRecord>,

    /// Name -> position in `records`. Later duplicates overwrite earlier ones.
    pub by_name: HashMap<String, usize>,

    pub sorted_names: Vec<String>,

    /// Distinct base names, sorted.
    pub sorted_base_names: Vec<String>,

    /// Positionally aligned with `records`.
    pub summaries: Vec<PackageSummary>,

    pub reverse_index: ReverseIndex,
}

impl CatalogSnapshot {
    /// Create an empty snapshot
    pub fn empty() -> Self {
        super::CatalogSnapshotBuilder::new().build()
    }

    pub(crate) fn from_inner(inner: SnapshotInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// True when both handles refer to the same published generation.
    pub fn ptr_eq(&self, other: &CatalogSnapshot) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // ---- Read-only accessors ----

    pub fn records(&self) -> &[PackageRecord] {
        &self.inner.records
    }

    pub fn record(&self, pos: usize) -> Option<&PackageRecord> {
        self.inner.records.get(pos)
    }

    pub fn len(&self) -> usize {
        self.inner.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.records.is_empty()
    }

    pub fn by_name(&self) -> &HashMap<String, usize> {
        &self.inner.by_name
    }

    /// Find a record by its exact name
    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        let pos = *self.inner.by_name.get(name)?;
        self.inner.records.get(pos)
    }

    pub fn sorted_names(&self) -> &[String] {
        &self.inner.sorted_names
    }

    pub fn sorted_base_names(&self) -> &[String] {
        &self.inner.sorted_base_names
    }

    pub fn summaries(&self) -> &[PackageSummary] {
        &self.inner.summaries
    }

    pub fn reverse_index(&self) -> &ReverseIndex {
        &self.inner.reverse_index
    }

    /// Records declaring `name` (already normalized) under `category`,
    /// in index order.
    pub fn references(
        &self,
        category: RefCategory,
        name: &str,
    ) -> impl Iterator<Item = &PackageRecord> + '_ {
        self.inner
            .reverse_index
            .get(category, name)
            .iter()
            .filter_map(|&pos| self.inner.records.get(pos))
    }
}
