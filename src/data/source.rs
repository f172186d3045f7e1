use std::sync::Arc;

use async_trait::async_trait;

use crate::config::is_remote;
use crate::data::FetchError;
use crate::models::RegulatoryDataset;

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

/// Abstract interface for retrieving the dataset document.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self) -> Result<RegulatoryDataset, FetchError>;

    /// Where the document comes from, for logs.
    fn describe(&self) -> String;
}

/// Parse a response body and report (but keep) inverted ranges.
pub fn decode_dataset(body: &str) -> Result<RegulatoryDataset, FetchError> {
    let dataset = RegulatoryDataset::from_json(body)?;
    for anomaly in dataset.inverted_ranges() {
        log::warn!("Inverted range left as-is: {}", anomaly);
    }
    Ok(dataset)
}

/// Plain GET with default headers.
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl DatasetSource for HttpSource {
    async fn fetch(&self) -> Result<RegulatoryDataset, FetchError> {
        let client = reqwest::Client::builder().build()?;
        let response = client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        decode_dataset(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the document from local disk (native only).
#[cfg(not(target_arch = "wasm32"))]
pub struct FileSource {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl DatasetSource for FileSource {
    async fn fetch(&self) -> Result<RegulatoryDataset, FetchError> {
        let body = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            FetchError::Transport(format!("failed to read {}: {}", self.path.display(), e))
        })?;
        decode_dataset(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Picks HTTP for URLs and the filesystem for everything else.
#[cfg(not(target_arch = "wasm32"))]
pub fn source_for(location: &str) -> Arc<dyn DatasetSource> {
    if is_remote(location) {
        Arc::new(HttpSource::new(location))
    } else {
        Arc::new(FileSource::new(location))
    }
}

/// In the browser everything is HTTP; bare paths resolve against the page origin.
#[cfg(target_arch = "wasm32")]
pub fn source_for(location: &str) -> Arc<dyn DatasetSource> {
    if is_remote(location) {
        return Arc::new(HttpSource::new(location));
    }
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    Arc::new(HttpSource::new(format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        location.trim_start_matches('/')
    )))
}
