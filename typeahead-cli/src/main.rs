//! Typeahead CLI - interactive product search demo
//!
//! Renders a text input that issues debounced, cancelable search requests
//! against a product catalog endpoint and shows the suggestions.

mod error;
mod tui_app;
mod ui;

use std::time::Duration;

use clap::Parser;
use typeahead::catalog::{CatalogConfig, HttpCatalogClient, DEFAULT_ENDPOINT, DEFAULT_PAGE_LIMIT};
use typeahead::logging;
use typeahead::suggest::{SuggestConfig, SuggestDaemon};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "typeahead")]
#[command(about = "Interactive debounced product search", long_about = None)]
#[command(version = typeahead::VERSION)]
struct Args {
    /// Catalog endpoint returning `{ "products": [...] }`
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Number of suggestions requested per search
    #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
    limit: u32,

    /// Debounce interval in milliseconds
    #[arg(long, default_value_t = 500)]
    debounce_ms: u64,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    log_dir: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(err) = run(args).await {
        err.exit();
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let _log_guard = logging::init_logging(&args.log_dir, logging::default_log_file())
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;

    tracing::info!(version = typeahead::VERSION, "Typeahead starting");

    let catalog_config = CatalogConfig::default()
        .with_endpoint(args.endpoint)
        .with_page_limit(args.limit)
        .with_timeout(Duration::from_secs(args.timeout_secs));
    let client = HttpCatalogClient::new(catalog_config).map_err(CliError::Client)?;

    let suggest_config =
        SuggestConfig::default().with_debounce_interval(Duration::from_millis(args.debounce_ms));
    let (daemon, handle) = SuggestDaemon::new(client, suggest_config);
    let daemon_task = daemon.start();

    // The TUI blocks on terminal input, so it runs off the async runtime.
    let ui_handle = handle.clone();
    let result = tokio::task::spawn_blocking(move || tui_app::run_tui(ui_handle))
        .await
        .map_err(|e| CliError::Ui(format!("UI task failed: {}", e)))?;

    handle.shutdown();
    let _ = tokio::time::timeout(Duration::from_secs(2), daemon_task).await;

    tracing::info!("Typeahead stopped");

    result
}
