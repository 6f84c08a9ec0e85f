//! Runtime settings read from the environment (and `.env` via dotenv)

use std::path::PathBuf;

use thiserror::Error;

use crate::models::AnalysisConfig;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub analysis: AnalysisConfig,
    pub chart_path: PathBuf,
    /// `None` uses the public endpoint
    pub api_base_url: Option<String>,
    pub api_key: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset or blank keys take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = AnalysisConfig::default();

        let lookback_days = match get("ANALYST_LOOKBACK_DAYS") {
            Some(raw) => parse_days(&raw)?,
            None => defaults.lookback_days,
        };

        let analysis = AnalysisConfig {
            asset_id: get("ANALYST_ASSET")
                .map(|v| v.to_lowercase())
                .unwrap_or(defaults.asset_id),
            vs_currency: get("ANALYST_VS_CURRENCY")
                .map(|v| v.to_lowercase())
                .unwrap_or(defaults.vs_currency),
            lookback_days,
            ..defaults
        };

        Ok(Settings {
            analysis,
            chart_path: get("ANALYST_CHART_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("analysis_dashboard.png")),
            api_base_url: get("COINGECKO_BASE_URL"),
            api_key: get("COINGECKO_API_KEY"),
        })
    }
}

fn parse_days(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        key: "ANALYST_LOOKBACK_DAYS",
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let days: u32 = raw.parse().map_err(|_| invalid("expected a whole number of days"))?;
    if days == 0 {
        return Err(invalid("must be at least 1"));
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]).expect("defaults failed");

        assert_eq!(settings.analysis, AnalysisConfig::default());
        assert_eq!(settings.analysis.lookback_days, 180);
        assert_eq!(settings.analysis.interval, "daily");
        assert_eq!(settings.chart_path, PathBuf::from("analysis_dashboard.png"));
        assert!(settings.api_base_url.is_none());
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let settings = settings_from(&[
            ("ANALYST_ASSET", "Ethereum"),
            ("ANALYST_VS_CURRENCY", "EUR"),
            ("ANALYST_LOOKBACK_DAYS", "365"),
            ("COINGECKO_API_KEY", "  abc  "),
            ("COINGECKO_BASE_URL", "http://localhost:8080/api/v3"),
            ("ANALYST_CHART_PATH", ""),
        ])
        .expect("overrides failed");

        assert_eq!(settings.analysis.asset_id, "ethereum");
        assert_eq!(settings.analysis.vs_currency, "eur");
        assert_eq!(settings.analysis.lookback_days, 365);
        assert_eq!(settings.api_key.as_deref(), Some("abc"));
        assert_eq!(settings.api_base_url.as_deref(), Some("http://localhost:8080/api/v3"));
        assert_eq!(settings.chart_path, PathBuf::from("analysis_dashboard.png"));
    }

    #[test]
    fn test_invalid_lookback() {
        let err = settings_from(&[("ANALYST_LOOKBACK_DAYS", "six months")]).unwrap_err();
        assert!(err.to_string().contains("ANALYST_LOOKBACK_DAYS"));

        assert!(settings_from(&[("ANALYST_LOOKBACK_DAYS", "0")]).is_err());
    }
}
