use crate::config::Settings;
use crate::engine::CatalogSnapshot;
use crate::error::{MirrorError, Result};
use crate::runtime::CatalogEngine;
use aurmirror_api::ApiError;
use std::sync::Arc;

mod catalog;
mod lifecycle;

/// Engine handle - the API surface handed to clients
///
/// Cheap to clone; every clone drives the same engine.
#[derive(Clone)]
pub struct EngineHandle {
    pub(crate) engine: Arc<CatalogEngine>,
}

impl EngineHandle {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::from_engine(Arc::new(CatalogEngine::from_settings(
            settings,
        )?)))
    }

    /// Create a handle from an existing engine (useful for testing)
    pub fn from_engine(engine: Arc<CatalogEngine>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Arc<CatalogEngine> {
        &self.engine
    }

    /// Get the published snapshot
    pub async fn snapshot(&self) -> Result<CatalogSnapshot> {
        self.engine.snapshot().await
    }
}

pub(crate) fn to_api_error(err: MirrorError) -> ApiError {
    match err {
        MirrorError::NotInitialized => ApiError::NotInitialized,
        MirrorError::InvalidQuery(msg) => ApiError::InvalidArgument(msg),
        MirrorError::TooManyResults(limit) => ApiError::TooManyResults(limit),
        MirrorError::Io(_) | MirrorError::Decode(_) | MirrorError::Fetch(_) => {
            ApiError::Refresh(err.to_string())
        }
        MirrorError::Config(_) | MirrorError::Internal(_) => ApiError::Internal(err.to_string()),
    }
}
