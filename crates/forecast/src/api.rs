//! REST client for the upstream weather provider.
//!
//! Wraps the provider's forecast and current-weather endpoints using
//! [`reqwest`].

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use weatherlog_core::location::LocationQuery;

use crate::source::{RawCurrent, RawForecast, WeatherSource};
use crate::wire::{CurrentResponse, ForecastResponse};

/// Connection settings for the provider.
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    /// Base URL without trailing slash, e.g. `https://weather-api167.p.rapidapi.com`.
    pub base_url: String,
    /// Value sent as `x-rapidapi-host`.
    pub api_host: String,
    /// Value sent as `x-rapidapi-key`.
    pub api_key: String,
    /// Number of forecast points requested (`cnt`).
    pub point_count: u32,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: "https://weather-api167.p.rapidapi.com".to_string(),
            api_host: "weather-api167.p.rapidapi.com".to_string(),
            api_key: String::new(),
            point_count: 40,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Errors from the provider REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Weather API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl ForecastError {
    /// The provider answered, but its body could not be decoded.
    pub fn is_unreadable_response(&self) -> bool {
        matches!(self, Self::Request(err) if err.is_decode())
    }
}

#[derive(Debug, Serialize)]
struct ForecastParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    place: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    zip: Option<&'a str>,
    cnt: u32,
    units: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    mode: &'static str,
    lang: &'static str,
}

#[derive(Debug, Serialize)]
struct CurrentParams<'a> {
    place: &'a str,
    units: &'static str,
    lang: &'static str,
    mode: &'static str,
}

/// HTTP client for the provider.
pub struct ForecastClient {
    client: reqwest::Client,
    config: ForecastConfig,
}

impl ForecastClient {
    /// Build a client with its own connection pool and the configured timeout.
    pub fn new(config: ForecastConfig) -> Result<Self, ForecastError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}{path}", self.config.base_url))
            .header("x-rapidapi-key", &self.config.api_key)
            .header("x-rapidapi-host", &self.config.api_host)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, otherwise capture the
    /// status and body text as [`ForecastError::Api`].
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ForecastError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ForecastError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ForecastError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl WeatherSource for ForecastClient {
    async fn fetch_forecast(&self, location: &LocationQuery) -> Result<RawForecast, ForecastError> {
        let params = ForecastParams {
            place: location.place_name(),
            lat: location.latitude,
            lon: location.longitude,
            zip: location.zip(),
            cnt: self.config.point_count,
            units: "standard",
            kind: "three_hour",
            mode: "json",
            lang: "en",
        };

        tracing::debug!(location = %location.label(), "Fetching forecast");
        let response = self
            .get("/api/weather/forecast")
            .query(&params)
            .send()
            .await?;

        let body: ForecastResponse = Self::parse_response(response).await?;
        let forecast = RawForecast::from(body);
        tracing::debug!(points = forecast.points.len(), "Forecast received");
        Ok(forecast)
    }

    async fn fetch_current(&self, place: &str) -> Result<RawCurrent, ForecastError> {
        let params = CurrentParams {
            place,
            units: "standard",
            lang: "en",
            mode: "json",
        };

        tracing::debug!(place, "Fetching current weather");
        let response = self
            .get("/api/weather/current")
            .query(&params)
            .send()
            .await?;

        let body: CurrentResponse = Self::parse_response(response).await?;
        Ok(RawCurrent::from(body))
    }
}
