//! Indicator models

use chrono::NaiveDate;

/// Periods used by the indicator engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorSettings {
    pub sma_period: usize,
    pub rsi_period: usize,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            sma_period: 50,
            rsi_period: 14,
        }
    }
}

/// A price row with both indicators defined
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorRow {
    pub date: NaiveDate,
    pub price: f64,
    pub sma: f64,
    pub rsi: f64,
}
