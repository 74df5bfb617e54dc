//! Process settings, read from a JSON file.

use crate::error::{MirrorError, Result};
use crate::loader::CatalogSource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const DEFAULT_CATALOG_URL: &str = "https://aur.archlinux.org/packages-meta-ext-v1.json.gz";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// URL of the catalog dump, or a local path when `load_from_file` is set.
    pub aur_file_location: String,
    pub load_from_file: bool,
    /// Seconds between background refreshes.
    pub refresh_interval: u64,
    pub max_results: usize,
    /// HTTP client timeout in seconds.
    pub fetch_timeout: u64,
    pub log_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            aur_file_location: DEFAULT_CATALOG_URL.to_string(),
            load_from_file: false,
            refresh_interval: 300,
            max_results: 5000,
            fetch_timeout: 60,
            log_dir: None,
        }
    }
}

impl Settings {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.refresh_interval == 0 {
            return Err(MirrorError::Config(
                "refresh_interval must be greater than 0".to_string(),
            ));
        }
        if self.max_results == 0 {
            return Err(MirrorError::Config(
                "max_results must be greater than 0".to_string(),
            ));
        }
        if self.aur_file_location.is_empty() {
            return Err(MirrorError::Config(
                "aur_file_location must not be empty".to_string(),
            ));
        }
        self.catalog_source().map(|_| ())
    }

    /// Where the catalog is loaded from.
    pub fn catalog_source(&self) -> Result<CatalogSource> {
        if self.load_from_file {
            return Ok(CatalogSource::File(PathBuf::from(&self.aur_file_location)));
        }

        let url = Url::parse(&self.aur_file_location).map_err(|e| {
            MirrorError::Config(format!("invalid catalog URL {}: {e}", self.aur_file_location))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(CatalogSource::Remote(url)),
            other => Err(MirrorError::Config(format!(
                "unsupported catalog URL scheme: {other}"
            ))),
        }
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.refresh_interval)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout)
    }
}
