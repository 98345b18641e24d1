//! Blocking HTTP client for the published snapshot document.
//!
//! Uses `reqwest::blocking` so it can run on the loader's `std::thread`
//! without an async runtime.

use std::path::PathBuf;
use std::time::Duration;

use statim_core::{DashboardSnapshot, FetchError, FileSource, SnapshotSource};

/// Reusable blocking client + snapshot URL.
pub struct HttpSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: &str, timeout: Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(
                    error = %e,
                    ?timeout,
                    "http client build failed, fetching without a timeout"
                );
                reqwest::blocking::Client::new()
            });
        Self {
            client,
            url: url.trim().to_string(),
        }
    }
}

impl SnapshotSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<DashboardSnapshot, FetchError> {
        let resp = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .map_err(classify)?;
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }
        let body = resp.bytes().map_err(classify)?;
        DashboardSnapshot::from_slice(&body)
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(err.to_string())
    }
}

/// Pick the snapshot source: a local file when one is given, else the URL.
pub fn source_for(
    file: Option<PathBuf>,
    url: &str,
    timeout: Duration,
) -> Box<dyn SnapshotSource> {
    match file {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(HttpSource::new(url, timeout)),
    }
}
