use aurmirror_api::{CatalogLifecycle, CatalogService, RefreshHandle};
use aurmirror_runtime::Settings;
use tracing::{error, info};

pub async fn run(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let engine = aurmirror_runtime::build_default_engine(settings)?;

    info!("Initializing: loading catalog from {}...", settings.aur_file_location);
    // Keep serving even if the first load fails; the loop retries.
    match engine.refresh().await {
        Ok(outcome) => info!("Initial load complete: {:?}", outcome),
        Err(e) => error!("Initial load failed: {}", e),
    }

    let period = settings.refresh_period();
    let refresher = engine.start_refresh_loop(period).await?;
    info!("Refreshing every {:?}. Press Ctrl+C to stop.", period);

    tokio::signal::ctrl_c().await?;
    refresher.stop();

    match engine.stats().await {
        Ok(stats) => info!("Stopped.\n{}", stats),
        Err(_) => info!("Stopped before any catalog was loaded."),
    }

    Ok(())
}
