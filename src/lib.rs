pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::{AppState, QueryLimits};
pub use adapters::source::{source_from_config, HttpJsonSource, JsonFileSource};
pub use config::TomlConfig;
pub use core::query::{Pagination, SearchQuery, TrademarkFilter};
pub use core::service::{SearchPage, TrademarkService};
pub use domain::model::{LoadSummary, TrademarkRecord};
pub use utils::error::{Result, TrademarkError};
