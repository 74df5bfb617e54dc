#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No snapshot has been published yet. Distinct from an empty catalog.
    #[error("Catalog not yet initialized")]
    NotInitialized,
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Too many package results (limit {0})")]
    TooManyResults(usize),
    #[error("Refresh failed: {0}")]
    Refresh(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
