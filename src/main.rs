use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod models;
mod services;
mod utils;

use api::coingecko::CoinGeckoClient;
use config::Settings;
use services::{analysis_service, chart_service, report_service};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("coin_analyst=info,reqwest=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("🚀 Starting coin-analyst...");

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return;
        }
    };

    let client = match settings.api_base_url {
        Some(base_url) => CoinGeckoClient::with_base_url(settings.api_key, base_url),
        None => CoinGeckoClient::new(settings.api_key),
    };
    info!("Using market data API at {}", client.base_url());

    let result = analysis_service::run_analysis(&client, &settings.analysis).await;

    if let Err(e) = chart_service::render_dashboard(
        &result.rows,
        &result.asset_id,
        &result.vs_currency,
        &settings.chart_path,
        chart_service::DEFAULT_SIZE,
    ) {
        warn!("Skipping dashboard: {}", e);
    }

    println!("{}", report_service::render_summary(&result));
}
