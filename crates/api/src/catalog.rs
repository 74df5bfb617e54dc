use crate::ApiResult;
use crate::models::{CatalogStats, PackageRecord, RefCategory, SearchBy};
use async_trait::async_trait;

/// Read-side lookups against the currently published catalog snapshot.
///
/// Every call reads the snapshot once, so a single answer never mixes two
/// catalog generations.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Records for each known name, in request order. Unknown names are skipped.
    async fn info(&self, names: &[String]) -> ApiResult<Vec<PackageRecord>>;

    async fn search(&self, by: SearchBy, arg: &str) -> ApiResult<Vec<PackageRecord>>;

    /// Package names starting with `prefix`, sorted.
    async fn suggest(&self, prefix: &str) -> ApiResult<Vec<String>>;

    /// Package base names starting with `prefix`, sorted.
    async fn suggest_pkgbase(&self, prefix: &str) -> ApiResult<Vec<String>>;

    /// Records declaring `token` under the given relationship.
    async fn references(
        &self,
        category: RefCategory,
        token: &str,
    ) -> ApiResult<Vec<PackageRecord>>;

    async fn stats(&self) -> ApiResult<CatalogStats>;
}
