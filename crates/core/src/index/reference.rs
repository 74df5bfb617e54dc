//! Reverse-reference index
//!
//! Maps `category-tag:normalized-name` to the records declaring that
//! reference. Back-references are positions into the snapshot's record list,
//! which never changes after the snapshot is built.

use super::normalize::normalize_ref;
use aurmirror_api::models::{PackageRecord, RefCategory};
use rayon::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ReverseIndex {
    buckets: HashMap<String, Vec<usize>>,
}

impl ReverseIndex {
    /// Composite bucket key for a category and an already-normalized name.
    pub fn key(category: RefCategory, name: &str) -> String {
        format!("{}:{}", category.tag(), name)
    }

    /// Index every relationship field of every record.
    ///
    /// Categories never share keys, so each one is built on its own and the
    /// partial maps are merged afterwards. Within a bucket, positions follow
    /// record order and repeat once per matching declaration.
    pub fn build(records: &[PackageRecord]) -> Self {
        let buckets = RefCategory::ALL
            .par_iter()
            .map(|&category| Self::build_category(records, category))
            .reduce(HashMap::new, |mut acc, part| {
                acc.extend(part);
                acc
            });

        Self { buckets }
    }

    fn build_category(
        records: &[PackageRecord],
        category: RefCategory,
    ) -> HashMap<String, Vec<usize>> {
        let mut buckets: HashMap<String, Vec<usize>> = HashMap::new();

        for (pos, record) in records.iter().enumerate() {
            for raw in record.relations(category) {
                // Every package implicitly provides itself; indexing that
                // would make each record a back-reference of its own name.
                if category == RefCategory::Provides && *raw == record.name {
                    continue;
                }
                buckets
                    .entry(Self::key(category, normalize_ref(raw)))
                    .or_default()
                    .push(pos);
            }
        }

        buckets
    }

    /// Record positions under a composite key; empty when the key is unknown.
    pub fn get_key(&self, key: &str) -> &[usize] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Record positions declaring `name` (already normalized) under `category`.
    pub fn get(&self, category: RefCategory, name: &str) -> &[usize] {
        self.get_key(&Self::key(category, name))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> PackageRecord {
        PackageRecord::new(name, name)
    }

    #[test]
    fn test_every_category_gets_its_own_prefix() {
        let mut pkg = record("app");
        pkg.depends = vec!["lib".into()];
        pkg.make_depends = vec!["lib".into()];
        pkg.opt_depends = vec!["lib: extra feature".into()];
        pkg.check_depends = vec!["lib".into()];
        pkg.conflicts = vec!["lib".into()];
        pkg.replaces = vec!["lib".into()];
        pkg.groups = vec!["lib".into()];
        pkg.keywords = vec!["lib".into()];
        pkg.provides = vec!["lib=1.0".into()];

        let index = ReverseIndex::build(&[pkg]);

        assert_eq!(index.len(), 9);
        for category in RefCategory::ALL {
            assert_eq!(index.get(category, "lib"), [0], "category {category}");
        }
        assert_eq!(index.get_key("make-depends:lib"), [0]);
    }

    #[test]
    fn test_self_provide_is_skipped() {
        let mut pkg = record("pkg");
        pkg.provides = vec!["pkg".into(), "pkg-bin".into()];

        let index = ReverseIndex::build(&[pkg]);

        assert!(index.get(RefCategory::Provides, "pkg").is_empty());
        assert_eq!(index.get(RefCategory::Provides, "pkg-bin"), [0]);
    }

    #[test]
    fn test_versioned_self_provide_is_kept() {
        // Only the exact raw name is suppressed.
        let mut pkg = record("pkg");
        pkg.provides = vec!["pkg=2.0".into()];

        let index = ReverseIndex::build(&[pkg]);
        assert_eq!(index.get(RefCategory::Provides, "pkg"), [0]);
    }

    #[test]
    fn test_other_providers_still_listed() {
        let mut first = record("pkg");
        first.provides = vec!["pkg".into()];
        let mut second = record("pkg-git");
        second.provides = vec!["pkg".into()];

        let index = ReverseIndex::build(&[first, second]);
        assert_eq!(index.get(RefCategory::Provides, "pkg"), [1]);
    }

    #[test]
    fn test_buckets_keep_order_and_duplicates() {
        let mut a = record("a");
        a.depends = vec!["z>=1".into(), "z<2".into()];
        let mut b = record("b");
        b.depends = vec!["z".into()];

        let index = ReverseIndex::build(&[a, b]);
        assert_eq!(index.get(RefCategory::Depends, "z"), [0, 0, 1]);
    }

    #[test]
    fn test_unknown_key_is_empty() {
        let index = ReverseIndex::build(&[]);
        assert!(index.is_empty());
        assert!(index.get_key("depends:nothing").is_empty());
    }
}
