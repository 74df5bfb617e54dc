use crate::error::{MirrorError, Result};
use reqwest::StatusCode;
use reqwest::header::{IF_MODIFIED_SINCE, LAST_MODIFIED};
use std::time::Duration;
use url::Url;

#[derive(Debug)]
pub enum FetchOutcome {
    Modified { body: Vec<u8>, last_modified: String },
    NotModified,
}

/// Conditional HTTP fetcher for the catalog dump.
#[derive(Clone)]
pub struct RemoteFetcher {
    client: reqwest::Client,
}

impl RemoteFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("aurmirror/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| MirrorError::Fetch(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// GET `url`, sending `last_modified` as `If-Modified-Since` when set.
    ///
    /// A 304, or a `Last-Modified` header equal to the marker we already
    /// have, is reported as `NotModified` without reading the body.
    pub async fn fetch(&self, url: &Url, last_modified: &str) -> Result<FetchOutcome> {
        let mut request = self.client.get(url.clone());
        if !last_modified.is_empty() {
            request = request.header(IF_MODIFIED_SINCE, last_modified);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_MODIFIED {
            tracing::debug!("{} not modified since {}", url, last_modified);
            return Ok(FetchOutcome::NotModified);
        }
        if !status.is_success() {
            return Err(MirrorError::Fetch(format!("HTTP {status} from {url}")));
        }

        let new_marker = response
            .headers()
            .get(LAST_MODIFIED)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !last_modified.is_empty() && new_marker == last_modified {
            tracing::debug!("{} unchanged (Last-Modified: {})", url, new_marker);
            return Ok(FetchOutcome::NotModified);
        }

        let body = response.bytes().await?.to_vec();
        tracing::debug!(bytes = body.len(), "Downloaded catalog from {}", url);

        Ok(FetchOutcome::Modified {
            body,
            last_modified: new_marker,
        })
    }
}
