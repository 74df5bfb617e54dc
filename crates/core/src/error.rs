use thiserror::Error;

#[derive(Error, Debug)]
pub enum MirrorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Catalog decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Fetch error: {0}")]
    Fetch(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Catalog not yet initialized")]
    NotInitialized,
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    #[error("Too many package results (limit {0})")]
    TooManyResults(usize),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for MirrorError {
    fn from(err: reqwest::Error) -> Self {
        MirrorError::Fetch(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MirrorError>;
