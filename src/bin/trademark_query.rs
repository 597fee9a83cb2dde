use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use trademark_search::adapters::export;
use trademark_search::utils::{logger, validation::Validate};
use trademark_search::{
    source_from_config, CliConfig, Pagination, QueryLimits, SearchQuery, TrademarkFilter,
    TrademarkService,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

#[derive(Parser)]
#[command(name = "trademark-query")]
#[command(about = "Search the trademark dataset once and print the results")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Trademark JSON file (overrides `data.path`)
    #[arg(long)]
    data: Option<String>,

    /// Registration status, e.g. 등록, 출원, 실효, 거절
    #[arg(long)]
    status: Option<String>,

    /// Substring of the product name
    #[arg(long)]
    product_name: Option<String>,

    /// Exact application number
    #[arg(long)]
    application_number: Option<String>,

    /// Earliest application date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Latest application date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,

    #[arg(long, default_value_t = 0)]
    skip: usize,

    /// Page size (defaults to `query.default_limit`)
    #[arg(long)]
    limit: Option<usize>,

    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print only the number of matching records
    #[arg(long)]
    count: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let cli = CliConfig {
        config: args.config.clone(),
        data: args.data.clone(),
        ..CliConfig::default()
    };
    let config = cli.resolve()?;
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let service = TrademarkService::new();
    let source = source_from_config(&config);
    let summary = service.reload_from(source.as_ref()).await;
    tracing::info!(
        "Loaded {} trademarks from {} ({} skipped)",
        summary.loaded,
        source.describe(),
        summary.skipped
    );

    let filter = TrademarkFilter {
        status: args.status,
        product_name: args.product_name,
        application_number: args.application_number,
        application_date_from: args.from,
        application_date_to: args.to,
    };

    if args.count {
        println!("{}", service.count(&filter));
        return Ok(());
    }

    let limit = QueryLimits::from_config(&config).resolve(args.limit);
    let query = SearchQuery::new(filter, Pagination::new(args.skip, limit));
    let page = service.search(&query);

    match args.format {
        OutputFormat::Json => println!("{}", export::to_json_pretty(&page)?),
        OutputFormat::Csv => export::write_csv(&page, std::io::stdout().lock())?,
    }

    Ok(())
}
