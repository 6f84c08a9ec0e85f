use tracing::{error, info};

use crate::api::coingecko::CoinGeckoClient;
use crate::models::{AnalysisConfig, AnalysisResult, RawPoint};
use crate::services::{decision_service, fetch_service, indicator_service, series_service};

/// Run the whole pipeline: fetch, clean, compute indicators, decide
///
/// A failed fetch continues on an empty series; the result records it.
pub async fn run_analysis(client: &CoinGeckoClient, config: &AnalysisConfig) -> AnalysisResult {
    let outcome = fetch_service::fetch_prices(client, config).await;
    let fetch_failed = outcome.is_failed();

    let mut result = analyze_points(config, &outcome.into_points());
    result.fetch_failed = fetch_failed;
    result
}

/// Offline part of the pipeline, starting from already fetched points
pub fn analyze_points(config: &AnalysisConfig, raw: &[RawPoint]) -> AnalysisResult {
    info!("🧹 Cleaning data...");
    let series = series_service::build_series(raw).unwrap_or_else(|e| {
        error!("❌ Discarding price data: {}", e);
        Vec::new()
    });

    let rows = indicator_service::compute_indicators(&series, &config.indicators);
    let decision = decision_service::decide_latest(&rows);

    AnalysisResult {
        asset_id: config.asset_id.clone(),
        vs_currency: config.vs_currency.clone(),
        fetch_failed: false,
        series,
        rows,
        decision,
    }
}
