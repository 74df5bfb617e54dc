use aurmirror_api::models::SearchBy;
use aurmirror_api::{CatalogLifecycle, CatalogService, MirrorEngine};
use aurmirror_runtime::Settings;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Build an engine and load the catalog once.
async fn loaded_engine(
    settings: &Settings,
) -> Result<Arc<dyn MirrorEngine>, Box<dyn std::error::Error>> {
    let engine = aurmirror_runtime::build_default_engine(settings)?;
    info!("Loading catalog from {}...", settings.aur_file_location);
    engine.refresh().await?;
    Ok(engine)
}

fn print_json<T: Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn stats(settings: &Settings) -> CliResult {
    let engine = loaded_engine(settings).await?;
    let stats = engine.stats().await?;
    println!("{stats}");
    Ok(())
}

pub async fn info(settings: &Settings, names: Vec<String>) -> CliResult {
    let engine = loaded_engine(settings).await?;
    let records = engine.info(&names).await?;
    if records.len() < names.len() {
        info!("{} of {} names not found", names.len() - records.len(), names.len());
    }
    print_json(&records)
}

pub async fn search(settings: &Settings, by: SearchBy, arg: String) -> CliResult {
    let engine = loaded_engine(settings).await?;
    let records = engine.search(by, &arg).await?;
    info!("{} results for {} = {:?}", records.len(), by, arg);
    print_json(&records)
}

pub async fn suggest(settings: &Settings, prefix: String, base: bool) -> CliResult {
    let engine = loaded_engine(settings).await?;
    let names = if base {
        engine.suggest_pkgbase(&prefix).await?
    } else {
        engine.suggest(&prefix).await?
    };
    for name in names {
        println!("{name}");
    }
    Ok(())
}
