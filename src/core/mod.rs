pub mod date;
pub mod loader;
pub mod query;
pub mod record;
pub mod service;
pub mod snapshot;

pub use crate::domain::model::{LoadReport, LoadSummary, RawRecord, Snapshot, TrademarkRecord};
pub use crate::domain::ports::{ConfigProvider, DataLocation, RecordSource};
pub use crate::utils::error::Result;
