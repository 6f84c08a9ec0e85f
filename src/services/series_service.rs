use chrono::DateTime;
use thiserror::Error;
use tracing::warn;

use crate::models::{PricePoint, RawPoint};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("Timestamp {0} ms is out of range")]
    InvalidTimestamp(i64),
}

/// Convert raw `[timestamp, price]` pairs into daily price points
///
/// The source order is trusted; nothing is re-sorted or filtered, so the
/// output has the same length as the input.
pub fn build_series(raw: &[RawPoint]) -> Result<Vec<PricePoint>, SeriesError> {
    let mut series: Vec<PricePoint> = Vec::with_capacity(raw.len());

    for point in raw {
        let date = DateTime::from_timestamp_millis(point.timestamp_millis)
            .ok_or(SeriesError::InvalidTimestamp(point.timestamp_millis))?
            .date_naive();

        if let Some(prev) = series.last() {
            if date <= prev.date {
                warn!("Price date {} does not advance past {}", date, prev.date);
            }
        }

        series.push(PricePoint { date, price: point.price });
    }

    Ok(series)
}
