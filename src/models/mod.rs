//! Data models for the analysis pipeline
//!
//! Each stage consumes the previous stage's output and returns a fresh `Vec`.

pub mod price;
pub mod indicator;
pub mod decision;
pub mod analysis;

pub use price::{RawPoint, PricePoint};
pub use indicator::{IndicatorRow, IndicatorSettings};
pub use decision::{Decision, Recommendation};
pub use analysis::{AnalysisConfig, AnalysisResult};
