use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// `RUST_LOG` wins; otherwise `level` (or debug when verbose) for this crate only.
fn env_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose {
            "debug"
        } else {
            level.unwrap_or("info")
        };
        EnvFilter::new(format!("trademark_search={}", level))
    })
}

pub fn init_cli_logger(verbose: bool) {
    init_logger(LogFormat::Compact, verbose, None);
}

pub fn init_logger(format: LogFormat, verbose: bool, level: Option<&str>) {
    let registry = tracing_subscriber::registry().with(env_filter(verbose, level));

    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init(),
        // 部署環境使用 JSON 格式，方便日誌收集
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_targets_this_crate_only() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = env_filter(false, Some("warn")).to_string().to_lowercase();
        assert_eq!(filter, "trademark_search=warn");

        let verbose = env_filter(true, Some("warn")).to_string().to_lowercase();
        assert_eq!(verbose, "trademark_search=debug");
    }
}
