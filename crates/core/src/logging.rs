use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const DEFAULT_LOG_DIR: &str = ".aurmirror/logs";

/// Default log directory, `~/.aurmirror/logs`.
pub fn default_log_dir() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(DEFAULT_LOG_DIR)
}

pub fn init_logging(
    component: &str,
    log_dir: Option<&Path>,
    to_stderr: bool,
    verbose: bool,
) -> WorkerGuard {
    let log_dir = log_dir.map(Path::to_path_buf).unwrap_or_else(default_log_dir);
    let _ = std::fs::create_dir_all(&log_dir);

    // Roll daily, with the component name as the prefix (e.g. serve.2024-01-21)
    let file_appender = tracing_appender::rolling::daily(&log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    guard
}
