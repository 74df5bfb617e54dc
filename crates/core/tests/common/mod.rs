#![allow(dead_code)]

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Two records: `a` depends on `b`, both provide their own name.
pub const TWO_RECORDS: &str = r#"[
    {"Name": "a", "PackageBase": "a", "Description": "package a",
     "Depends": ["b>=1.0"], "Provides": ["a"]},
    {"Name": "b", "PackageBase": "b", "Description": "package b",
     "Provides": ["b", "libb"]}
]"#;

pub const THREE_RECORDS: &str = r#"[
    {"Name": "a", "PackageBase": "a", "Depends": ["b>=1.0"]},
    {"Name": "b", "PackageBase": "b", "Provides": ["b", "libb"]},
    {"Name": "b-docs", "PackageBase": "b", "Depends": null, "Groups": ["docs"]}
]"#;

pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap()
}

pub fn write_plain(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, json).unwrap();
    path
}

pub fn write_gz(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, gzip(json.as_bytes())).unwrap();
    path
}

/// What the in-process catalog server currently serves.
pub struct Served {
    pub body: Vec<u8>,
    pub last_modified: String,
    pub status: StatusCode,
    pub requests: usize,
    pub conditional_requests: usize,
}

#[derive(Clone)]
pub struct CatalogServer {
    pub url: String,
    state: Arc<Mutex<Served>>,
}

impl CatalogServer {
    /// Bind an ephemeral port and serve `body` at `/packages-meta-ext-v1.json`.
    pub async fn start(body: Vec<u8>, last_modified: &str) -> Self {
        let state = Arc::new(Mutex::new(Served {
            body,
            last_modified: last_modified.to_string(),
            status: StatusCode::OK,
            requests: 0,
            conditional_requests: 0,
        }));

        let app = Router::new()
            .route("/packages-meta-ext-v1.json", get(serve_catalog))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}/packages-meta-ext-v1.json"),
            state,
        }
    }

    pub fn set_body(&self, body: Vec<u8>, last_modified: &str) {
        let mut served = self.state.lock().unwrap();
        served.body = body;
        served.last_modified = last_modified.to_string();
    }

    pub fn set_status(&self, status: StatusCode) {
        self.state.lock().unwrap().status = status;
    }

    pub fn requests(&self) -> usize {
        self.state.lock().unwrap().requests
    }

    pub fn conditional_requests(&self) -> usize {
        self.state.lock().unwrap().conditional_requests
    }
}

async fn serve_catalog(State(state): State<Arc<Mutex<Served>>>, headers: HeaderMap) -> Response {
    let mut served = state.lock().unwrap();
    served.requests += 1;

    if served.status != StatusCode::OK {
        return served.status.into_response();
    }

    if let Some(since) = headers.get(header::IF_MODIFIED_SINCE) {
        served.conditional_requests += 1;
        if since.to_str().ok() == Some(served.last_modified.as_str()) {
            return StatusCode::NOT_MODIFIED.into_response();
        }
    }

    (
        [(header::LAST_MODIFIED, served.last_modified.clone())],
        served.body.clone(),
    )
        .into_response()
}
