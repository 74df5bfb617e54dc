use super::{EngineHandle, to_api_error};
use crate::error::Result;
use crate::query::QueryEngine;
use async_trait::async_trait;
use aurmirror_api::models::{CatalogStats, PackageRecord, RefCategory, SearchBy};
use aurmirror_api::{ApiError, ApiResult, CatalogService};

impl EngineHandle {
    /// Run a lookup against one snapshot on the blocking pool.
    async fn with_query<T, F>(&self, f: F) -> ApiResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&QueryEngine<'_>) -> Result<T> + Send + 'static,
    {
        let snapshot = self.snapshot().await.map_err(to_api_error)?;
        let max_results = self.engine.max_results();

        tokio::task::spawn_blocking(move || {
            let engine = QueryEngine::new(&snapshot, max_results);
            f(&engine)
        })
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(to_api_error)
    }
}

fn owned(records: Vec<&PackageRecord>) -> Vec<PackageRecord> {
    records.into_iter().cloned().collect()
}

#[async_trait]
impl CatalogService for EngineHandle {
    async fn info(&self, names: &[String]) -> ApiResult<Vec<PackageRecord>> {
        let names = names.to_vec();
        self.with_query(move |q| Ok(owned(q.info(&names)))).await
    }

    async fn search(&self, by: SearchBy, arg: &str) -> ApiResult<Vec<PackageRecord>> {
        let arg = arg.to_string();
        self.with_query(move |q| q.search(by, &arg).map(owned)).await
    }

    async fn suggest(&self, prefix: &str) -> ApiResult<Vec<String>> {
        let prefix = prefix.to_string();
        self.with_query(move |q| Ok(q.suggest(&prefix).into_iter().map(String::from).collect()))
            .await
    }

    async fn suggest_pkgbase(&self, prefix: &str) -> ApiResult<Vec<String>> {
        let prefix = prefix.to_string();
        self.with_query(move |q| {
            Ok(q.suggest_pkgbase(&prefix)
                .into_iter()
                .map(String::from)
                .collect())
        })
        .await
    }

    async fn references(
        &self,
        category: RefCategory,
        token: &str,
    ) -> ApiResult<Vec<PackageRecord>> {
        let token = token.to_string();
        self.with_query(move |q| Ok(owned(q.references(category, &token)))).await
    }

    async fn stats(&self) -> ApiResult<CatalogStats> {
        self.engine.store().stats().await.map_err(to_api_error)
    }
}
