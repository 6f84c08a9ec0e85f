use tracing::{error, info};

use crate::api::coingecko::CoinGeckoClient;
use crate::models::{AnalysisConfig, RawPoint};

/// Outcome of the single market data request
///
/// `Fetched` may still be empty; `Failed` carries the logged error message.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Fetched(Vec<RawPoint>),
    Failed(String),
}

impl FetchOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    /// Fail-soft view: a failed fetch becomes an empty series
    pub fn into_points(self) -> Vec<RawPoint> {
        match self {
            FetchOutcome::Fetched(points) => points,
            FetchOutcome::Failed(_) => Vec::new(),
        }
    }
}

/// Fetch the configured lookback window of prices
///
/// Never returns an error: any transport or decoding failure is logged and
/// reported as `FetchOutcome::Failed`.
pub async fn fetch_prices(client: &CoinGeckoClient, config: &AnalysisConfig) -> FetchOutcome {
    info!("📡 Connecting to market data API for {}/{}...", config.asset_id, config.vs_currency);

    match client
        .get_market_chart(
            &config.asset_id,
            &config.vs_currency,
            config.lookback_days,
            &config.interval,
        )
        .await
    {
        Ok(chart) => {
            let points = chart.into_raw_points();
            info!("✅ Data fetched successfully! ({} days)", points.len());
            FetchOutcome::Fetched(points)
        }
        Err(e) => {
            error!("❌ Error fetching data: {}", e);
            FetchOutcome::Failed(e.to_string())
        }
    }
}
