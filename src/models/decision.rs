//! Recommendation models

use std::fmt;

/// Recommendation labels, in rule priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    SellTakeProfit,
    BuyTheDip,
    BuyTrendFollowing,
    CautionSell,
    Hold,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::SellTakeProfit => "SELL / TAKE PROFIT",
            Recommendation::BuyTheDip => "BUY THE DIP",
            Recommendation::BuyTrendFollowing => "BUY (Trend Following)",
            Recommendation::CautionSell => "CAUTION / SELL",
            Recommendation::Hold => "HOLD (Wait)",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of the decision engine for the latest indicator row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub recommendation: Recommendation,
    pub reason: &'static str,
}
