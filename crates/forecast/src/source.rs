use async_trait::async_trait;
use weatherlog_core::current::RawCurrentWeather;
use weatherlog_core::forecast::RawForecastPoint;
use weatherlog_core::location::LocationQuery;

use crate::api::ForecastError;

/// A forecast series as returned by the provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawForecast {
    pub points: Vec<RawForecastPoint>,
    /// Location's offset from UTC in seconds, when the provider reports it.
    pub utc_offset_secs: Option<i32>,
}

/// A current-conditions reading as returned by the provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCurrent {
    pub reading: RawCurrentWeather,
    pub utc_offset_secs: Option<i32>,
}

/// Anything that can answer forecast and current-weather lookups.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch the multi-point forecast for a location.
    async fn fetch_forecast(&self, location: &LocationQuery) -> Result<RawForecast, ForecastError>;

    /// Fetch current conditions for a named place.
    async fn fetch_current(&self, place: &str) -> Result<RawCurrent, ForecastError>;
}
