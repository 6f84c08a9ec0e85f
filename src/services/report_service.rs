use crate::models::{AnalysisResult, Decision, IndicatorRow, PricePoint};
use crate::utils::{format_currency, Table};

const RULE_WIDTH: usize = 40;

/// Tail preview of the cleaned price series
pub fn render_series_preview(series: &[PricePoint], count: usize) -> String {
    let mut table = Table::new(vec!["Date", "Price"]);
    let start = series.len().saturating_sub(count);

    for point in &series[start..] {
        table.add_row(vec![point.date.to_string(), format!("{:.2}", point.price)]);
    }

    table.render()
}

/// The final analyst block for the latest row and its decision
pub fn render_report(latest: &IndicatorRow, decision: &Decision) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let thin_rule = "-".repeat(RULE_WIDTH);

    [
        rule.clone(),
        "🤖 AUTOMATED ANALYST REPORT".to_string(),
        rule.clone(),
        format!("Current Price:   {}", format_currency(latest.price)),
        format!("50-Day Average:  {}", format_currency(latest.sma)),
        format!("Current RSI:     {:.2}", latest.rsi),
        thin_rule,
        format!("📢 RECOMMENDATION: {}", decision.recommendation),
        format!("📝 REASON:         {}", decision.reason),
        rule,
    ]
    .join("\n")
}

/// Full console output for a run, including the no-data case
pub fn render_summary(result: &AnalysisResult) -> String {
    let mut sections = Vec::new();

    if result.fetch_failed {
        sections.push(format!(
            "⚠️  Market data for {}/{} could not be fetched.",
            result.asset_id, result.vs_currency
        ));
    }

    sections.push(render_series_preview(&result.series, 3));

    match (result.latest(), result.decision.as_ref()) {
        (Some(latest), Some(decision)) => sections.push(render_report(latest, decision)),
        _ => sections.push(format!(
            "Not enough data for a recommendation ({} price points, {} complete rows).",
            result.series.len(),
            result.rows.len()
        )),
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Recommendation;
    use crate::services::decision_service;
    use chrono::NaiveDate;

    fn row(price: f64, sma: f64, rsi: f64) -> IndicatorRow {
        IndicatorRow {
            date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            price,
            sma,
            rsi,
        }
    }

    #[test]
    fn test_report_block() {
        let latest = row(61234.567, 58000.0, 55.321);
        let decision = decision_service::decide(latest.price, latest.sma, latest.rsi);

        let report = render_report(&latest, &decision);

        assert!(report.contains("Current Price:   $61,234.57"));
        assert!(report.contains("50-Day Average:  $58,000.00"));
        assert!(report.contains("Current RSI:     55.32"));
        assert!(report.contains("RECOMMENDATION: BUY (Trend Following)"));
        assert!(report.contains("REASON:         Price is in an Uptrend"));
    }

    #[test]
    fn test_preview_shows_last_rows() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let series: Vec<PricePoint> = (0..10)
            .map(|i| PricePoint { date: start + chrono::Duration::days(i), price: i as f64 })
            .collect();

        let preview = render_series_preview(&series, 3);

        assert_eq!(preview.lines().count(), 5);
        assert!(preview.contains("2024-01-08"));
        assert!(preview.contains("2024-01-10"));
        assert!(!preview.contains("2024-01-07"));
    }

    #[test]
    fn test_summary_without_data() {
        let result = AnalysisResult {
            asset_id: "bitcoin".to_string(),
            vs_currency: "usd".to_string(),
            fetch_failed: true,
            series: Vec::new(),
            rows: Vec::new(),
            decision: None,
        };

        let summary = render_summary(&result);

        assert!(summary.contains("bitcoin/usd could not be fetched"));
        assert!(summary.contains("Not enough data for a recommendation (0 price points, 0 complete rows)."));
    }

    #[test]
    fn test_summary_with_decision() {
        let latest = row(100.0, 90.0, 75.0);
        let result = AnalysisResult {
            asset_id: "bitcoin".to_string(),
            vs_currency: "usd".to_string(),
            fetch_failed: false,
            series: vec![PricePoint { date: latest.date, price: latest.price }],
            rows: vec![latest],
            decision: Some(decision_service::decide(100.0, 90.0, 75.0)),
        };

        let summary = render_summary(&result);

        assert!(!summary.contains("could not be fetched"));
        assert!(summary.contains(Recommendation::SellTakeProfit.label()));
    }
}
