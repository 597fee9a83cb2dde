use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrademarkError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for `{field}`: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data source unavailable: {message}")]
    SourceUnavailable { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TrademarkError {
    pub fn source_unavailable(message: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) => ErrorCategory::Network,
            Self::IoError(_) => ErrorCategory::Io,
            Self::CsvError(_)
            | Self::SerializationError(_)
            | Self::SourceUnavailable { .. } => ErrorCategory::Data,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 資料來源失效時服務仍以空資料啟動
            Self::SourceUnavailable { .. } => ErrorSeverity::Low,
            Self::HttpError(_) => ErrorSeverity::Medium,
            Self::CsvError(_) | Self::SerializationError(_) => ErrorSeverity::High,
            Self::IoError(_) | Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::HttpError(_) => "Could not reach the remote trademark dataset.".to_string(),
            Self::IoError(e) => format!("File system error: {}", e),
            Self::CsvError(_) => "Failed to write CSV output.".to_string(),
            Self::SerializationError(_) => "Failed to encode or decode JSON.".to_string(),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting `{}` is invalid: {}", field, reason)
            }
            Self::SourceUnavailable { message } => {
                format!("Trademark data could not be loaded: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the dataset URL and network connectivity, then retry.",
            ErrorCategory::Io => "Check that the path exists and is readable.",
            ErrorCategory::Data => "Make sure the data file is a JSON array of trademark records.",
            ErrorCategory::Configuration => "Review the TOML config file and command-line flags.",
        }
    }
}

pub type Result<T> = std::result::Result<T, TrademarkError>;
