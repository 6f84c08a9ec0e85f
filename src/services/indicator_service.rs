use tracing::{debug, info};

use crate::models::{IndicatorRow, IndicatorSettings, PricePoint};

/// Trailing simple moving average
///
/// `result[i]` is the mean of `prices[i + 1 - period..=i]`, or `None` while
/// fewer than `period` prices are available.
pub fn simple_moving_average(prices: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; prices.len()];
    }

    (0..prices.len())
        .map(|i| {
            if i + 1 < period {
                return None;
            }
            let window = &prices[i + 1 - period..=i];
            Some(window.iter().sum::<f64>() / period as f64)
        })
        .collect()
}

/// Trailing relative strength index using simple averages of gains and losses
///
/// `result[i]` needs `period` price changes, i.e. is defined for `i >= period`.
/// A window without losses scores 100.
pub fn relative_strength_index(prices: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; prices.len()];
    }

    // changes[k] is the move into prices[k + 1]
    let changes: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();

    (0..prices.len())
        .map(|i| {
            if i < period {
                return None;
            }
            let window = &changes[i - period..i];
            let gain = window.iter().map(|c| c.max(0.0)).sum::<f64>() / period as f64;
            let loss = window.iter().map(|c| (-c).max(0.0)).sum::<f64>() / period as f64;
            Some(rsi_from_averages(gain, loss))
        })
        .collect()
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Compute SMA and RSI for the series and keep only rows where both exist
pub fn compute_indicators(series: &[PricePoint], settings: &IndicatorSettings) -> Vec<IndicatorRow> {
    info!(
        "🧠 Calculating indicators (SMA {} & RSI {})...",
        settings.sma_period, settings.rsi_period
    );

    let prices: Vec<f64> = series.iter().map(|p| p.price).collect();
    let sma = simple_moving_average(&prices, settings.sma_period);
    let rsi = relative_strength_index(&prices, settings.rsi_period);

    let rows: Vec<IndicatorRow> = series
        .iter()
        .zip(sma.into_iter().zip(rsi))
        .filter_map(|(point, (sma, rsi))| {
            Some(IndicatorRow {
                date: point.date,
                price: point.price,
                sma: sma?,
                rsi: rsi?,
            })
        })
        .collect();

    debug!("Dropped {} incomplete rows", series.len() - rows.len());
    info!("✅ Indicators calculated ({} rows).", rows.len());

    rows
}
