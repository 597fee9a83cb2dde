use crate::domain::model::RawRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Where the raw trademark document comes from.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch and parse the whole document into raw records.
    async fn fetch(&self) -> Result<Vec<RawRecord>>;

    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLocation {
    File(String),
    Url(String),
}

pub trait ConfigProvider: Send + Sync {
    fn data_location(&self) -> DataLocation;
    fn source_timeout_seconds(&self) -> Option<u64>;
    fn source_headers(&self) -> Option<&HashMap<String, String>>;
    fn bind_addr(&self) -> &str;
    fn default_limit(&self) -> usize;
    fn max_limit(&self) -> Option<usize>;
}
