use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::RawPoint;

/// Response from GET /coins/{id}/market_chart
///
/// Only `prices` is required; `market_caps` and `total_volumes` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<(i64, f64)>,
}

impl MarketChartResponse {
    pub fn into_raw_points(self) -> Vec<RawPoint> {
        self.prices
            .into_iter()
            .map(|(timestamp_millis, price)| RawPoint { timestamp_millis, price })
            .collect()
    }
}

/// Error body returned by the API on failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<String>,
    pub status: Option<ErrorStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorStatus {
    pub error_code: Option<i32>,
    pub error_message: Option<String>,
}

impl ErrorResponse {
    /// Best human-readable message carried by the body
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().or_else(|| {
            self.status
                .as_ref()
                .and_then(|s| s.error_message.as_deref())
        })
    }
}

/// Error type for market data API operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// 400 Bad Request
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// 401 Unauthorized
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// 404 Not Found (unknown asset id)
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 429 Too Many Requests
    #[error("Rate Limited{}", retry_hint(.retry_after))]
    RateLimited { retry_after: Option<u64> },
    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    /// Other HTTP errors
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Body did not match the expected shape
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}

fn retry_hint(retry_after: &Option<u64>) -> String {
    match retry_after {
        Some(secs) => format!(". Retry after {} s", secs),
        None => String::new(),
    }
}
