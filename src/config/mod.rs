pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::{error::Result, logger::LogFormat};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "trademark-search")]
#[command(about = "Read-only search API over a trademark registration dataset")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Trademark JSON file (overrides `data.path`)
    #[arg(long)]
    pub data: Option<String>,

    /// Fetch the dataset from this URL instead of a file (overrides `data.url`)
    #[arg(long, conflicts_with = "data")]
    pub url: Option<String>,

    /// Address to listen on (overrides `server.bind`)
    #[arg(long)]
    pub bind: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔（若有指定），再套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(path) = &self.data {
            config.data.path = path.clone();
            config.data.url = None;
        }
        if let Some(url) = &self.url {
            config.data.url = Some(url.clone());
        }
        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if self.json_logs {
            config.logging.format = LogFormat::Json;
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::core::{ConfigProvider, DataLocation};

    #[test]
    fn test_cli_overrides_file_settings() {
        let mut config = TomlConfig::from_toml_str(
            r#"
[data]
url = "https://data.example.com/trademarks.json"

[server]
bind = "127.0.0.1:8000"
"#,
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "trademark-search",
            "--data",
            "local.json",
            "--bind",
            "0.0.0.0:8080",
            "--json-logs",
        ]);
        cli.apply_overrides(&mut config);

        assert_eq!(
            config.data_location(),
            DataLocation::File("local.json".to_string())
        );
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_resolve_without_config_file() {
        let cli = CliConfig::parse_from(["trademark-search", "--url", "http://localhost:9999/data"]);
        let config = cli.resolve().unwrap();
        assert_eq!(
            config.data_location(),
            DataLocation::Url("http://localhost:9999/data".to_string())
        );
    }

    #[test]
    fn test_data_and_url_conflict() {
        let result =
            CliConfig::try_parse_from(["trademark-search", "--data", "a.json", "--url", "http://x"]);
        assert!(result.is_err());
    }
}
