use crate::engine::CatalogSnapshot;
use crate::error::{MirrorError, Result};
use crate::index::normalize_ref;
use aurmirror_api::models::{PackageRecord, RefCategory, SearchBy};

/// Maximum number of names returned by the suggest lookups.
pub const SUGGEST_LIMIT: usize = 20;

/// Lookups over one snapshot. Never touches the store, so a whole query
/// sees a single catalog generation.
pub struct QueryEngine<'a> {
    snapshot: &'a CatalogSnapshot,
    max_results: usize,
}

impl<'a> QueryEngine<'a> {
    pub fn new(snapshot: &'a CatalogSnapshot, max_results: usize) -> Self {
        Self {
            snapshot,
            max_results,
        }
    }

    /// Records for each known name, in request order.
    pub fn info<S: AsRef<str>>(&self, names: &[S]) -> Vec<&'a PackageRecord> {
        names
            .iter()
            .filter_map(|name| self.snapshot.get(name.as_ref()))
            .collect()
    }

    pub fn search(&self, by: SearchBy, arg: &str) -> Result<Vec<&'a PackageRecord>> {
        if arg.is_empty() {
            return Err(MirrorError::InvalidQuery(
                "search argument must not be empty".to_string(),
            ));
        }

        let results = match by.category() {
            Some(category) => self.references(category, arg),
            None => self.search_text(by, &arg.to_lowercase()),
        };

        if results.len() > self.max_results {
            return Err(MirrorError::TooManyResults(self.max_results));
        }
        Ok(results)
    }

    /// Case-insensitive substring search on names, or on names and
    /// descriptions through the summary list.
    fn search_text(&self, by: SearchBy, needle: &str) -> Vec<&'a PackageRecord> {
        let snapshot = self.snapshot;
        match by {
            SearchBy::NameDesc => snapshot
                .summaries()
                .iter()
                .enumerate()
                .filter(|(_, summary)| {
                    summary.name.to_lowercase().contains(needle)
                        || summary
                            .description
                            .as_deref()
                            .is_some_and(|d| d.to_lowercase().contains(needle))
                })
                .filter_map(|(pos, _)| snapshot.record(pos))
                .collect(),
            _ => snapshot
                .records()
                .iter()
                .filter(|record| record.name.to_lowercase().contains(needle))
                .collect(),
        }
    }

    /// Records declaring `token` under `category`. The token is normalized
    /// the same way the index keys were.
    pub fn references(&self, category: RefCategory, token: &str) -> Vec<&'a PackageRecord> {
        let snapshot = self.snapshot;
        snapshot
            .reverse_index()
            .get(category, normalize_ref(token))
            .iter()
            .filter_map(|&pos| snapshot.record(pos))
            .collect()
    }

    /// Up to `SUGGEST_LIMIT` package names starting with `prefix`.
    pub fn suggest(&self, prefix: &str) -> Vec<&'a str> {
        Self::prefix_scan(self.snapshot.sorted_names(), prefix)
    }

    /// Up to `SUGGEST_LIMIT` package base names starting with `prefix`.
    pub fn suggest_pkgbase(&self, prefix: &str) -> Vec<&'a str> {
        Self::prefix_scan(self.snapshot.sorted_base_names(), prefix)
    }

    fn prefix_scan(sorted: &'a [String], prefix: &str) -> Vec<&'a str> {
        let start = sorted.partition_point(|name| name.as_str() < prefix);
        sorted[start..]
            .iter()
            .take_while(|name| name.starts_with(prefix))
            .take(SUGGEST_LIMIT)
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CatalogSnapshotBuilder;

    fn sample() -> CatalogSnapshot {
        let mut git = PackageRecord::new("git-lfs", "git-lfs");
        git.description = Some("Git extension for versioning large files".into());
        git.depends = vec!["git>=2".into()];

        let mut tig = PackageRecord::new("tig", "tig");
        tig.description = Some("Text-mode interface for GIT".into());
        tig.depends = vec!["git".into(), "ncurses".into()];

        let mut py = PackageRecord::new("python-foo", "foo");
        py.provides = vec!["python-foo".into(), "foo-lib=1".into()];
        let py2 = PackageRecord::new("python2-foo", "foo");

        CatalogSnapshotBuilder::from_records(vec![git, tig, py, py2]).build()
    }

    fn names(records: &[&PackageRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_info_keeps_request_order_and_skips_unknown() {
        let snapshot = sample();
        let engine = QueryEngine::new(&snapshot, 100);
        let found = engine.info(&["tig", "missing", "git-lfs"]);
        assert_eq!(names(&found), ["tig", "git-lfs"]);
    }

    #[test]
    fn test_search_by_name_is_case_insensitive() {
        let snapshot = sample();
        let engine = QueryEngine::new(&snapshot, 100);
        let found = engine.search(SearchBy::Name, "FOO").unwrap();
        assert_eq!(names(&found), ["python-foo", "python2-foo"]);
    }

    #[test]
    fn test_search_name_desc_uses_descriptions() {
        let snapshot = sample();
        let engine = QueryEngine::new(&snapshot, 100);
        let found = engine.search(SearchBy::NameDesc, "git").unwrap();
        assert_eq!(names(&found), ["git-lfs", "tig"]);
    }

    #[test]
    fn test_search_by_reference_normalizes_argument() {
        let snapshot = sample();
        let engine = QueryEngine::new(&snapshot, 100);
        let found = engine.search(SearchBy::Depends, "git>=2.40").unwrap();
        assert_eq!(names(&found), ["git-lfs", "tig"]);

        let found = engine.search(SearchBy::Provides, "foo-lib").unwrap();
        assert_eq!(names(&found), ["python-foo"]);
        assert!(engine.search(SearchBy::Provides, "python-foo").unwrap().is_empty());
    }

    #[test]
    fn test_search_limits() {
        let snapshot = sample();
        let engine = QueryEngine::new(&snapshot, 1);
        assert!(matches!(
            engine.search(SearchBy::Depends, "git"),
            Err(MirrorError::TooManyResults(1))
        ));
        assert!(matches!(
            engine.search(SearchBy::Name, ""),
            Err(MirrorError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_suggest_prefix_scan() {
        let snapshot = sample();
        let engine = QueryEngine::new(&snapshot, 100);
        assert_eq!(engine.suggest("python"), ["python-foo", "python2-foo"]);
        assert_eq!(engine.suggest("t"), ["tig"]);
        assert!(engine.suggest("zzz").is_empty());
        assert_eq!(engine.suggest_pkgbase("f"), ["foo"]);
    }

    #[test]
    fn test_suggest_is_capped() {
        let snapshot = (0..50)
            .map(|i| PackageRecord::new(format!("lib{i:02}"), "lib"))
            .collect::<CatalogSnapshotBuilder>()
            .build();
        let engine = QueryEngine::new(&snapshot, 100);

        let suggestions = engine.suggest("lib");
        assert_eq!(suggestions.len(), SUGGEST_LIMIT);
        assert_eq!(suggestions[0], "lib00");
        assert_eq!(suggestions[19], "lib19");
    }
}
