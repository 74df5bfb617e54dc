//! Catalog loading
//!
//! Turns a catalog source into decoded records. File reads, gunzip and JSON
//! decoding are blocking work and run on the blocking pool; remote fetches
//! are async and conditional on the last seen `Last-Modified` marker.

mod file;
mod remote;

pub use file::{is_compressed_path, read_catalog_file};
pub use remote::{FetchOutcome, RemoteFetcher};

use crate::error::{MirrorError, Result};
use aurmirror_api::models::PackageRecord;
use flate2::read::GzDecoder;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Where catalog bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Remote(Url),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Remote(url) => write!(f, "{url}"),
        }
    }
}

#[derive(Debug)]
pub enum LoadOutcome {
    Loaded {
        records: Vec<PackageRecord>,
        /// New freshness marker; empty for file sources or when the server sent none.
        last_modified: String,
    },
    NotModified,
}

/// Decode a full catalog dump (a JSON array of records).
pub fn decode_records(bytes: &[u8]) -> Result<Vec<PackageRecord>> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Gunzip `bytes` if they start with the gzip magic, otherwise return them as-is.
pub(crate) fn gunzip_if_compressed(bytes: Vec<u8>) -> Result<Vec<u8>> {
    if !bytes.starts_with(&GZIP_MAGIC) {
        return Ok(bytes);
    }
    let mut out = Vec::new();
    GzDecoder::new(bytes.as_slice()).read_to_end(&mut out)?;
    Ok(out)
}

pub struct CatalogLoader {
    fetcher: RemoteFetcher,
}

impl CatalogLoader {
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            fetcher: RemoteFetcher::new(timeout)?,
        })
    }

    /// Load and decode the catalog. `last_modified` is only consulted for
    /// remote sources.
    pub async fn load(&self, source: &CatalogSource, last_modified: &str) -> Result<LoadOutcome> {
        match source {
            CatalogSource::File(path) => {
                let path = path.clone();
                let records = tokio::task::spawn_blocking(move || -> Result<_> {
                    let bytes = read_catalog_file(&path)?;
                    decode_records(&bytes)
                })
                .await
                .map_err(|e| MirrorError::Internal(e.to_string()))??;

                Ok(LoadOutcome::Loaded {
                    records,
                    last_modified: String::new(),
                })
            }
            CatalogSource::Remote(url) => match self.fetcher.fetch(url, last_modified).await? {
                FetchOutcome::NotModified => Ok(LoadOutcome::NotModified),
                FetchOutcome::Modified {
                    body,
                    last_modified,
                } => {
                    let records = tokio::task::spawn_blocking(move || -> Result<_> {
                        let bytes = gunzip_if_compressed(body)?;
                        decode_records(&bytes)
                    })
                    .await
                    .map_err(|e| MirrorError::Internal(e.to_string()))??;

                    Ok(LoadOutcome::Loaded {
                        records,
                        last_modified,
                    })
                }
            },
        }
    }
}
