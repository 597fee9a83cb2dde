// Adapters layer: concrete implementations for external systems (data sources, http, export).

pub mod export;
pub mod http;
pub mod source;
