use crate::core::query::DEFAULT_LIMIT;
use crate::core::{ConfigProvider, DataLocation};
use crate::utils::error::{Result, TrademarkError};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_DATA_PATH: &str = "trademark_sample.json";
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub data: DataConfig,
    pub server: ServerConfig,
    pub query: QueryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub path: String,
    /// When set, the dataset is fetched over HTTP and `path` is ignored.
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATA_PATH.to_string(),
            url: None,
            timeout_seconds: None,
            headers: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub default_limit: usize,
    pub max_limit: Option<usize>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: LogFormat,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TrademarkError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TrademarkError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TrademarkError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        match &self.data.url {
            Some(url) => validation::validate_url("data.url", url)?,
            None => validation::validate_path("data.path", &self.data.path)?,
        }

        if let Some(timeout) = self.data.timeout_seconds {
            validation::validate_positive_number("data.timeout_seconds", timeout as usize, 1)?;
        }

        validation::validate_socket_addr("server.bind", &self.server.bind)?;
        validation::validate_positive_number("query.default_limit", self.query.default_limit, 1)?;

        if let Some(max_limit) = self.query.max_limit {
            validation::validate_positive_number(
                "query.max_limit",
                max_limit,
                self.query.default_limit,
            )?;
        }

        if let Some(level) = &self.logging.level {
            if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
                return Err(TrademarkError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn data_location(&self) -> DataLocation {
        match &self.data.url {
            Some(url) => DataLocation::Url(url.clone()),
            None => DataLocation::File(self.data.path.clone()),
        }
    }

    fn source_timeout_seconds(&self) -> Option<u64> {
        self.data.timeout_seconds
    }

    fn source_headers(&self) -> Option<&HashMap<String, String>> {
        self.data.headers.as_ref()
    }

    fn bind_addr(&self) -> &str {
        &self.server.bind
    }

    fn default_limit(&self) -> usize {
        self.query.default_limit
    }

    fn max_limit(&self) -> Option<usize> {
        self.query.max_limit
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(
            config.data_location(),
            DataLocation::File(DEFAULT_DATA_PATH.to_string())
        );
        assert_eq!(config.bind_addr(), DEFAULT_BIND);
        assert_eq!(config.default_limit(), 10);
        assert_eq!(config.max_limit(), None);
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[data]
url = "https://data.example.com/trademarks.json"
timeout_seconds = 30

[data.headers]
Authorization = "Bearer token"

[server]
bind = "0.0.0.0:9000"

[query]
default_limit = 20
max_limit = 100

[logging]
level = "debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.data_location(),
            DataLocation::Url("https://data.example.com/trademarks.json".to_string())
        );
        assert_eq!(config.source_timeout_seconds(), Some(30));
        assert_eq!(
            config
                .source_headers()
                .and_then(|h| h.get("Authorization"))
                .map(String::as_str),
            Some("Bearer token")
        );
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.default_limit(), 20);
        assert_eq!(config.max_limit(), Some(100));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TRADEMARK_TEST_DATA_PATH", "/srv/data/trademarks.json");

        let toml_content = r#"
[data]
path = "${TRADEMARK_TEST_DATA_PATH}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.data.path, "/srv/data/trademarks.json");

        std::env::remove_var("TRADEMARK_TEST_DATA_PATH");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let config = TomlConfig::from_toml_str(
            r#"
[data]
path = "${TRADEMARK_TEST_SURELY_UNSET}"
"#,
        )
        .unwrap();
        assert_eq!(config.data.path, "${TRADEMARK_TEST_SURELY_UNSET}");
    }

    #[test]
    fn test_config_validation() {
        let invalid = [
            "[data]\nurl = \"ftp://example.com/data.json\"",
            "[data]\npath = \"\"",
            "[server]\nbind = \"not-an-address\"",
            "[query]\ndefault_limit = 0",
            "[query]\ndefault_limit = 20\nmax_limit = 5",
            "[logging]\nlevel = \"loud\"",
        ];

        for toml_content in invalid {
            let config = TomlConfig::from_toml_str(toml_content).unwrap();
            assert!(config.validate().is_err(), "expected invalid: {}", toml_content);
        }
    }

    #[test]
    fn test_hostname_bind_is_valid() {
        let config = TomlConfig::from_toml_str("[server]\nbind = \"localhost:8000\"").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[data\npath = 1").unwrap_err();
        assert!(matches!(err, TrademarkError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[data]
path = "fixtures/trademarks.json"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.data.path, "fixtures/trademarks.json");
    }
}
