use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use tracing::info;

use crate::models::IndicatorRow;
use crate::services::decision_service::{OVERBOUGHT_RSI, OVERSOLD_RSI};

const PRICE_COLOR: RGBColor = RGBColor(0x33, 0x33, 0x33);
const SMA_COLOR: RGBColor = RGBColor(0xe6, 0x7e, 0x22);
const RSI_COLOR: RGBColor = RGBColor(0x8e, 0x44, 0xad);
const BAND_COLOR: RGBColor = RGBColor(0x80, 0x80, 0x80);

pub const DEFAULT_SIZE: (u32, u32) = (1400, 1000);

fn to_timestamp(date: NaiveDate) -> DateTime<Utc> {
    DateTime::<Utc>::from_naive_utc_and_offset(date.and_time(NaiveTime::default()), Utc)
}

/// `bitcoin` -> `Bitcoin`
fn display_name(asset_id: &str) -> String {
    let mut chars = asset_id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Value range covering every price and SMA value, with 10% padding
fn price_range(rows: &[IndicatorRow]) -> (f64, f64) {
    let min_price = rows.iter()
        .flat_map(|r| [r.price, r.sma])
        .fold(f64::INFINITY, f64::min);
    let max_price = rows.iter()
        .flat_map(|r| [r.price, r.sma])
        .fold(f64::NEG_INFINITY, f64::max);

    let padding = (max_price - min_price).max(1e-8) * 0.1;
    ((min_price - padding).max(0.0), max_price + padding)
}

/// Render the two-panel dashboard as a PNG at `path`
///
/// Top panel: price and its moving average. Bottom panel: RSI with the
/// overbought/oversold reference lines and the neutral band between them.
pub fn render_dashboard(
    rows: &[IndicatorRow],
    asset_id: &str,
    vs_currency: &str,
    path: &Path,
    (width, height): (u32, u32),
) -> Result<(), String> {
    if rows.len() < 2 {
        return Err("❌ Not enough indicator data to generate chart (minimum 2 rows required).".to_string());
    }

    info!("📊 Generating dashboard at {}...", path.display());

    let name = display_name(asset_id);
    let x_min = to_timestamp(rows[0].date);
    let x_max = to_timestamp(rows[rows.len() - 1].date);

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| format!("Failed to fill canvas: {}", e))?;

    let (upper, lower) = root.split_vertically(height / 2);

    // Top chart: price vs trend
    let (y_min, y_max) = price_range(rows);
    let mut price_chart = ChartBuilder::on(&upper)
        .caption(
            &format!("{} Price vs Long-Term Trend", name),
            ("sans-serif", 28.0).into_font(),
        )
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| format!("Failed to build price chart: {}", e))?;

    price_chart
        .configure_mesh()
        .y_desc(&format!("Price ({})", vs_currency.to_uppercase()))
        .x_label_formatter(&|dt| dt.format("%Y-%m-%d").to_string())
        .draw()
        .map_err(|e| format!("Failed to draw price mesh: {}", e))?;

    price_chart
        .draw_series(LineSeries::new(
            rows.iter().map(|r| (to_timestamp(r.date), r.price)),
            PRICE_COLOR.stroke_width(2),
        ))
        .map_err(|e| format!("Failed to draw price line: {}", e))?
        .label(format!("{} Price", name))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], PRICE_COLOR));

    price_chart
        .draw_series(DashedLineSeries::new(
            rows.iter().map(|r| (to_timestamp(r.date), r.sma)).collect::<Vec<_>>(),
            8,
            4,
            SMA_COLOR.stroke_width(2),
        ))
        .map_err(|e| format!("Failed to draw SMA line: {}", e))?
        .label("50-Day Trend (SMA)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], SMA_COLOR));

    price_chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| format!("Failed to draw price legend: {}", e))?;

    // Bottom chart: RSI with danger zones
    let mut rsi_chart = ChartBuilder::on(&lower)
        .caption("Relative Strength Index (RSI)", ("sans-serif", 28.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, 0.0..100.0)
        .map_err(|e| format!("Failed to build RSI chart: {}", e))?;

    rsi_chart
        .configure_mesh()
        .y_desc("RSI Score (0-100)")
        .x_label_formatter(&|dt| dt.format("%Y-%m-%d").to_string())
        .draw()
        .map_err(|e| format!("Failed to draw RSI mesh: {}", e))?;

    rsi_chart
        .draw_series(std::iter::once(Rectangle::new(
            [(x_min, OVERSOLD_RSI), (x_max, OVERBOUGHT_RSI)],
            BAND_COLOR.mix(0.1).filled(),
        )))
        .map_err(|e| format!("Failed to draw neutral band: {}", e))?;

    rsi_chart
        .draw_series(DashedLineSeries::new(
            vec![(x_min, OVERBOUGHT_RSI), (x_max, OVERBOUGHT_RSI)],
            8,
            4,
            RED.mix(0.5).stroke_width(1),
        ))
        .map_err(|e| format!("Failed to draw overbought line: {}", e))?
        .label("Overbought (>70)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.mix(0.5)));

    rsi_chart
        .draw_series(DashedLineSeries::new(
            vec![(x_min, OVERSOLD_RSI), (x_max, OVERSOLD_RSI)],
            8,
            4,
            GREEN.mix(0.5).stroke_width(1),
        ))
        .map_err(|e| format!("Failed to draw oversold line: {}", e))?
        .label("Oversold (<30)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.mix(0.5)));

    rsi_chart
        .draw_series(LineSeries::new(
            rows.iter().map(|r| (to_timestamp(r.date), r.rsi)),
            RSI_COLOR.stroke_width(2),
        ))
        .map_err(|e| format!("Failed to draw RSI line: {}", e))?
        .label("RSI Momentum")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RSI_COLOR));

    rsi_chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| format!("Failed to draw RSI legend: {}", e))?;

    root.present()
        .map_err(|e| format!("Failed to render chart: {}", e))?;

    info!("✅ Dashboard saved to {}", path.display());
    Ok(())
}
