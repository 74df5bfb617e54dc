use aurmirror_api::MirrorEngine;
use aurmirror_core::EngineHandle;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;

pub use aurmirror_core::Settings;

/// Bootstraps a catalog engine from settings.
///
/// The returned engine holds no snapshot yet; callers decide whether to
/// refresh once up front and whether to start the background loop.
pub fn build_default_engine(
    settings: &Settings,
) -> aurmirror_core::Result<Arc<dyn MirrorEngine>> {
    let handle = EngineHandle::from_settings(settings)?;
    tracing::debug!("Catalog engine ready for {}", handle.engine().source());
    Ok(Arc::new(handle))
}

/// Initializes logging for a component, writing under the configured log
/// directory or the default one.
pub fn init_logging(component: &str, settings: &Settings, verbose: bool) -> WorkerGuard {
    aurmirror_core::logging::init_logging(component, settings.log_dir.as_deref(), true, verbose)
}
