pub mod catalog;
pub mod error;
pub mod lifecycle;
pub mod models;

// Re-export commonly used types
pub use catalog::CatalogService;
pub use error::{ApiError, ApiResult};
pub use lifecycle::{CatalogLifecycle, RefreshHandle};
pub use models::*;

/// Composite trait representing the full mirror engine API.
/// Clients depend on this single trait instead of the individual services.
pub trait MirrorEngine: CatalogService + CatalogLifecycle {}

impl<T: CatalogService + CatalogLifecycle> MirrorEngine for T {}
