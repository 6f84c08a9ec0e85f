use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, RETRY_AFTER};
use super::models::{ApiError, ErrorResponse, MarketChartResponse};
use tracing::{debug, warn};

/// CoinGecko public API client for historical market charts
pub struct CoinGeckoClient {
    http_client: HttpClient,
    api_key: Option<String>,
    base_url: String,
}

impl CoinGeckoClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.coingecko.com/api/v3";
    const API_KEY_HEADER: &'static str = "x-cg-demo-api-key";

    /// Create a new client against the public endpoint
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a new client with custom base URL (mirrors, testing)
    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create default headers, with the demo key when one is configured
    fn create_headers(&self) -> Result<HeaderMap, String> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(key) = &self.api_key {
            let key_value = HeaderValue::from_str(key)
                .map_err(|e| format!("Failed to create api key header: {}", e))?;
            headers.insert(Self::API_KEY_HEADER, key_value);
        }

        Ok(headers)
    }

    /// Parse error response based on HTTP status code
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok());
        let body_text = response.text().await.unwrap_or_default();

        // Prefer the API's own message over the raw body
        let message = serde_json::from_str::<ErrorResponse>(&body_text)
            .ok()
            .and_then(|err| err.message().map(str::to_string))
            .unwrap_or(body_text);

        match status_code {
            400 => ApiError::BadRequest(message),
            401 => ApiError::Unauthorized(message),
            404 => ApiError::NotFound(message),
            429 => {
                warn!("Rate limited by market data API, retry after {:?} s", retry_after);
                ApiError::RateLimited { retry_after }
            }
            500..=599 => {
                warn!("Server error {}: {}", status_code, message);
                ApiError::ServerError(status_code, message)
            }
            _ => ApiError::HttpError(status_code, message),
        }
    }

    /// GET /coins/{asset_id}/market_chart
    ///
    /// Retrieves `[timestamp, price]` pairs for the asset priced in `vs_currency`.
    ///
    /// # Arguments
    /// * `asset_id` - CoinGecko coin id, e.g. `bitcoin`
    /// * `vs_currency` - Fiat currency code, e.g. `usd`
    /// * `days` - Lookback window in days
    /// * `interval` - Sampling interval, e.g. `daily`
    ///
    /// # Returns
    /// * `Ok(MarketChartResponse)` - Price history, oldest first
    /// * `Err(ApiError)` - Transport, status, or decoding failure
    pub async fn get_market_chart(
        &self,
        asset_id: &str,
        vs_currency: &str,
        days: u32,
        interval: &str,
    ) -> Result<MarketChartResponse, ApiError> {
        let url = format!("{}/coins/{}/market_chart", self.base_url, asset_id);
        let headers = self.create_headers()
            .map_err(ApiError::RequestError)?;
        let days = days.to_string();

        debug!("GET {} (vs_currency={}, days={}, interval={})", url, vs_currency, days, interval);

        let response = self.http_client
            .get(&url)
            .headers(headers)
            .query(&[
                ("vs_currency", vs_currency),
                ("days", days.as_str()),
                ("interval", interval),
            ])
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<MarketChartResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = CoinGeckoClient::with_base_url(None, "http://localhost:8080/api/v3/".to_string());
        assert_eq!(client.base_url(), "http://localhost:8080/api/v3");
    }

    #[test]
    fn test_headers_include_api_key() {
        let client = CoinGeckoClient::new(Some("demo-key".to_string()));
        let headers = client.create_headers().expect("headers failed");
        assert_eq!(headers.get("x-cg-demo-api-key").unwrap(), "demo-key");

        let client = CoinGeckoClient::new(None);
        let headers = client.create_headers().expect("headers failed");
        assert!(headers.get("x-cg-demo-api-key").is_none());
    }

    #[test]
    fn test_invalid_api_key_is_rejected() {
        let client = CoinGeckoClient::new(Some("bad\nkey".to_string()));
        assert!(client.create_headers().is_err());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_error() {
        let client = CoinGeckoClient::with_base_url(None, "http://127.0.0.1:9".to_string());
        let result = client.get_market_chart("bitcoin", "usd", 180, "daily").await;
        assert!(matches!(result, Err(ApiError::RequestError(_))));
    }
}
