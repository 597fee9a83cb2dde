use clap::Parser;
use std::sync::Arc;
use trademark_search::adapters::http;
use trademark_search::core::ConfigProvider;
use trademark_search::utils::error::{ErrorSeverity, TrademarkError};
use trademark_search::utils::{logger, validation::Validate};
use trademark_search::{source_from_config, AppState, CliConfig, QueryLimits, TrademarkService};

fn exit_with(e: &TrademarkError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 設定檔錯誤時日誌尚未初始化，直接輸出到 stderr
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(3);
        }
    };

    logger::init_logger(
        config.logging.format,
        cli.verbose,
        config.logging.level.as_deref(),
    );

    tracing::info!("Starting trademark-search");
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let service = Arc::new(TrademarkService::new());
    let source = source_from_config(&config);
    let summary = service.reload_from(source.as_ref()).await;
    tracing::info!(
        "📁 {} trademarks ready from {} ({} skipped)",
        summary.loaded,
        source.describe(),
        summary.skipped
    );

    let listener = match tokio::net::TcpListener::bind(config.bind_addr()).await {
        Ok(listener) => listener,
        Err(e) => exit_with(&TrademarkError::IoError(e)),
    };
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);

    let state = AppState::new(service, QueryLimits::from_config(&config));
    if let Err(e) = http::serve(listener, state).await {
        exit_with(&e);
    }

    Ok(())
}
