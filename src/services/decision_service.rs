use crate::models::{Decision, IndicatorRow, Recommendation};

pub const OVERBOUGHT_RSI: f64 = 70.0;
pub const OVERSOLD_RSI: f64 = 30.0;
/// Upper RSI bound for a trend-following entry
pub const HEALTHY_RSI: f64 = 60.0;

/// Apply the ordered rule list to the latest indicator values
///
/// Rules are evaluated top to bottom and the first match wins. Price above
/// the average with RSI in `[60, 70]` matches nothing and falls through to hold.
pub fn decide(price: f64, sma: f64, rsi: f64) -> Decision {
    if rsi > OVERBOUGHT_RSI {
        Decision {
            recommendation: Recommendation::SellTakeProfit,
            reason: "RSI > 70. Asset is Overbought. Risk of correction is high.",
        }
    } else if rsi < OVERSOLD_RSI {
        Decision {
            recommendation: Recommendation::BuyTheDip,
            reason: "RSI < 30. Asset is Oversold. Good entry point.",
        }
    } else if price > sma && rsi < HEALTHY_RSI {
        Decision {
            recommendation: Recommendation::BuyTrendFollowing,
            reason: "Price is in an Uptrend (Above SMA) and RSI is healthy.",
        }
    } else if price < sma {
        Decision {
            recommendation: Recommendation::CautionSell,
            reason: "Price is below 50-day average (Downtrend).",
        }
    } else {
        Decision {
            recommendation: Recommendation::Hold,
            reason: "The market is neutral.",
        }
    }
}

/// Decide on the most recent row, if any
pub fn decide_latest(rows: &[IndicatorRow]) -> Option<Decision> {
    rows.last().map(|row| decide(row.price, row.sma, row.rsi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_overbought_wins_over_trend() {
        let decision = decide(100.0, 90.0, 75.0);
        assert_eq!(decision.recommendation, Recommendation::SellTakeProfit);
        assert_eq!(decision.recommendation.label(), "SELL / TAKE PROFIT");
    }

    #[test]
    fn test_oversold_regardless_of_trend() {
        for (price, sma) in [(110.0, 100.0), (90.0, 100.0), (100.0, 100.0)] {
            assert_eq!(decide(price, sma, 20.0).recommendation, Recommendation::BuyTheDip);
        }
    }

    #[test]
    fn test_trend_following() {
        let decision = decide(110.0, 100.0, 50.0);
        assert_eq!(decision.recommendation.label(), "BUY (Trend Following)");
    }

    #[test]
    fn test_downtrend() {
        let decision = decide(90.0, 100.0, 50.0);
        assert_eq!(decision.recommendation.label(), "CAUTION / SELL");
    }

    #[test]
    fn test_strong_uptrend_falls_through_to_hold() {
        let decision = decide(110.0, 100.0, 65.0);
        assert_eq!(decision.recommendation, Recommendation::Hold);
        assert_eq!(decision.reason, "The market is neutral.");
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(decide(110.0, 100.0, 70.0).recommendation, Recommendation::Hold);
        assert_eq!(decide(90.0, 100.0, 30.0).recommendation, Recommendation::CautionSell);
        assert_eq!(decide(110.0, 100.0, 60.0).recommendation, Recommendation::Hold);
        assert_eq!(decide(100.0, 100.0, 50.0).recommendation, Recommendation::Hold);
    }

    #[test]
    fn test_decide_latest_uses_last_row() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let rows = vec![
            IndicatorRow { date, price: 100.0, sma: 90.0, rsi: 80.0 },
            IndicatorRow { date: date.succ_opt().unwrap(), price: 90.0, sma: 100.0, rsi: 45.0 },
        ];

        let decision = decide_latest(&rows).expect("no decision");
        assert_eq!(decision.recommendation, Recommendation::CautionSell);
        assert!(decide_latest(&[]).is_none());
    }
}
