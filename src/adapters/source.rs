use crate::core::loader::parse_document;
use crate::domain::model::RawRecord;
use crate::domain::ports::{ConfigProvider, DataLocation, RecordSource};
use crate::utils::error::{Result, TrademarkError};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Reads the trademark document from the local file system.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn fetch(&self) -> Result<Vec<RawRecord>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            TrademarkError::source_unavailable(format!("{}: {}", self.path.display(), e))
        })?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), self.path.display());
        parse_document(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetches the trademark document with a single GET request.
#[derive(Debug, Clone)]
pub struct HttpJsonSource {
    url: String,
    client: Client,
    headers: HashMap<String, String>,
    timeout: Option<Duration>,
}

impl HttpJsonSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
            headers: HashMap::new(),
            timeout: None,
        }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl RecordSource for HttpJsonSource {
    async fn fetch(&self) -> Result<Vec<RawRecord>> {
        let mut request = self.client.get(&self.url);

        // 添加自定義標頭
        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("Fetching trademark data from: {}", self.url);
        let response = request.send().await?;
        tracing::debug!("Response status: {}", response.status());

        if !response.status().is_success() {
            return Err(TrademarkError::source_unavailable(format!(
                "{} returned HTTP {}",
                self.url,
                response.status()
            )));
        }

        let bytes = response.bytes().await?;
        parse_document(&bytes)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Pick the source named by the configuration.
pub fn source_from_config(config: &impl ConfigProvider) -> Box<dyn RecordSource> {
    match config.data_location() {
        DataLocation::File(path) => Box::new(JsonFileSource::new(path)),
        DataLocation::Url(url) => {
            let mut source = HttpJsonSource::new(url);
            if let Some(headers) = config.source_headers() {
                source = source.with_headers(headers.clone());
            }
            if let Some(seconds) = config.source_timeout_seconds() {
                source = source.with_timeout(Duration::from_secs(seconds));
            }
            Box::new(source)
        }
    }
}
