pub mod config;
pub mod engine;
pub mod error;
pub mod handle;
pub mod index;
pub mod loader;
pub mod logging;
pub mod query;
pub mod runtime;

pub use config::Settings;
pub use engine::{CatalogSnapshot, CatalogSnapshotBuilder, CatalogStore};
pub use error::{MirrorError, Result};
pub use handle::EngineHandle;
pub use runtime::CatalogEngine;
