//! Pipeline configuration and result models

use super::{Decision, IndicatorRow, IndicatorSettings, PricePoint};

/// Inputs of a single analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub asset_id: String,
    pub vs_currency: String,
    pub lookback_days: u32,
    pub interval: String,
    pub indicators: IndicatorSettings,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            asset_id: "bitcoin".to_string(),
            vs_currency: "usd".to_string(),
            lookback_days: 180,
            interval: "daily".to_string(),
            indicators: IndicatorSettings::default(),
        }
    }
}

/// Everything the presenter needs from one run
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub asset_id: String,
    pub vs_currency: String,
    /// True when the fetch failed and the run continued on an empty series
    pub fetch_failed: bool,
    pub series: Vec<PricePoint>,
    pub rows: Vec<IndicatorRow>,
    pub decision: Option<Decision>,
}

impl AnalysisResult {
    /// The most recent row of the working series
    pub fn latest(&self) -> Option<&IndicatorRow> {
        self.rows.last()
    }
}
