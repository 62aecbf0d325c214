use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use chrono::{FixedOffset, NaiveDate, Utc};
use weatherlog_forecast::ForecastConfig;

/// A configuration value that could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// SQLite connection string.
    pub database_url: String,
    /// UTC offset used for local dates when the provider reports none.
    pub default_utc_offset: FixedOffset,
    /// Upstream provider settings.
    pub forecast: ForecastConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                                  |
    /// |----------------------------|------------------------------------------|
    /// | `HOST`                     | `0.0.0.0`                                |
    /// | `PORT`                     | `3000`                                   |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`                  |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                                     |
    /// | `DATABASE_URL`             | `sqlite://weather.db?mode=rwc`           |
    /// | `FORECAST_UTC_OFFSET_SECS` | `0`                                      |
    /// | `WEATHER_API_BASE_URL`     | `https://weather-api167.p.rapidapi.com`  |
    /// | `WEATHER_API_HOST`         | `weather-api167.p.rapidapi.com`          |
    /// | `WEATHER_API_KEY`          | empty                                    |
    /// | `WEATHER_API_TIMEOUT_SECS` | `10`                                     |
    /// | `FORECAST_POINT_COUNT`     | `40`                                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or("HOST", "0.0.0.0");
        let port: u16 = parse_env("PORT", "3000", "a valid port number")?;

        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    expected: "a comma-separated list of origins",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs: u64 =
            parse_env("REQUEST_TIMEOUT_SECS", "30", "a whole number of seconds")?;

        let database_url = env_or("DATABASE_URL", "sqlite://weather.db?mode=rwc");

        let offset_secs: i32 =
            parse_env("FORECAST_UTC_OFFSET_SECS", "0", "an offset in seconds")?;
        let default_utc_offset =
            FixedOffset::east_opt(offset_secs).ok_or_else(|| ConfigError::Invalid {
                var: "FORECAST_UTC_OFFSET_SECS",
                expected: "within one day of UTC",
                value: offset_secs.to_string(),
            })?;

        let defaults = ForecastConfig::default();
        let forecast = ForecastConfig {
            base_url: env_or("WEATHER_API_BASE_URL", &defaults.base_url)
                .trim_end_matches('/')
                .to_string(),
            api_host: env_or("WEATHER_API_HOST", &defaults.api_host),
            api_key: env_or("WEATHER_API_KEY", ""),
            point_count: parse_env("FORECAST_POINT_COUNT", "40", "a positive number")?,
            timeout: Duration::from_secs(parse_env(
                "WEATHER_API_TIMEOUT_SECS",
                "10",
                "a whole number of seconds",
            )?),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            default_utc_offset,
            forecast,
        })
    }

    /// Offset to render a provider series in: the provider's, else the default.
    pub fn offset_for(&self, provider_offset_secs: Option<i32>) -> FixedOffset {
        provider_offset_secs
            .and_then(FixedOffset::east_opt)
            .unwrap_or(self.default_utc_offset)
    }

    /// Today's date at the default offset.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.default_utc_offset).date_naive()
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: FromStr>(
    var: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let value = env_or(var, default);
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_env_reports_variable_and_value() {
        // Unset variable falls back to the (bad) default, which must be reported.
        let err = parse_env::<u16>("WEATHERLOG_TEST_UNSET_PORT", "not-a-port", "a valid port number")
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("WEATHERLOG_TEST_UNSET_PORT"));
        assert!(msg.contains("not-a-port"));
    }

    #[test]
    fn provider_offset_preferred_over_default() {
        let config = ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            cors_origins: vec![],
            request_timeout_secs: 30,
            database_url: "sqlite::memory:".into(),
            default_utc_offset: FixedOffset::east_opt(3600).unwrap(),
            forecast: ForecastConfig::default(),
        };

        assert_eq!(config.offset_for(Some(-18_000)).local_minus_utc(), -18_000);
        assert_eq!(config.offset_for(None).local_minus_utc(), 3600);
        // Out-of-range provider values fall back too.
        assert_eq!(config.offset_for(Some(200_000)).local_minus_utc(), 3600);
    }
}
