//! Price series models

use chrono::NaiveDate;

/// A raw `[timestamp, price]` pair as delivered by the market-chart endpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPoint {
    pub timestamp_millis: i64,
    pub price: f64,
}

/// A single daily price, keyed by its UTC calendar date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}
