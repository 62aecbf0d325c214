//! Current-conditions summary for the pass-through weather lookup.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::forecast::kelvin_to_celsius;

/// A provider current-weather reading before conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCurrentWeather {
    pub description: Option<String>,
    pub feels_like_k: Option<f64>,
    pub temp_min_k: Option<f64>,
    pub temp_max_k: Option<f64>,
    /// Percent.
    pub humidity: Option<f64>,
    /// Metres per second.
    pub wind_speed: Option<f64>,
    pub rain_mm: Option<f64>,
    pub snow_mm: Option<f64>,
    /// Unix timestamps (seconds, UTC).
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

/// Current conditions in display units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentWeatherSummary {
    pub description: Option<String>,
    pub temperature_current_c: Option<f64>,
    pub temperature_min_c: Option<f64>,
    pub temperature_max_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub wind_speed_ms: Option<f64>,
    pub rain_mm: Option<f64>,
    pub snow_mm: Option<f64>,
    /// Local `HH:MM`.
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
}

/// Convert a raw reading to Celsius and local clock times.
pub fn summarize_current(raw: &RawCurrentWeather, offset: FixedOffset) -> CurrentWeatherSummary {
    CurrentWeatherSummary {
        description: raw.description.clone(),
        temperature_current_c: raw.feels_like_k.and_then(kelvin_to_celsius),
        temperature_min_c: raw.temp_min_k.and_then(kelvin_to_celsius),
        temperature_max_c: raw.temp_max_k.and_then(kelvin_to_celsius),
        humidity_pct: raw.humidity,
        wind_speed_ms: raw.wind_speed,
        rain_mm: raw.rain_mm,
        snow_mm: raw.snow_mm,
        sunrise: raw.sunrise.and_then(|t| clock_time(t, offset)),
        sunset: raw.sunset.and_then(|t| clock_time(t, offset)),
    }
}

fn clock_time(timestamp: i64, offset: FixedOffset) -> Option<String> {
    let utc = DateTime::from_timestamp(timestamp, 0)?;
    Some(utc.with_timezone(&offset).format("%H:%M").to_string())
}
