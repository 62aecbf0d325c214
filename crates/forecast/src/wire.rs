//! Provider response layouts.
//!
//! The provider spells its temperature keys `temprature_*`; the standard
//! `temp_*` spelling is accepted too, alone or alongside it. Every nested
//! object is optional so a partial payload degrades instead of failing to
//! decode.

use serde::Deserialize;
use weatherlog_core::current::RawCurrentWeather;
use weatherlog_core::forecast::RawForecastPoint;

use crate::source::{RawCurrent, RawForecast};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MainBlock {
    #[serde(default)]
    temprature_min: Option<f64>,
    #[serde(default)]
    temp_min: Option<f64>,
    #[serde(default)]
    temprature_max: Option<f64>,
    #[serde(default)]
    temp_max: Option<f64>,
    #[serde(default)]
    temprature_feels_like: Option<f64>,
    #[serde(default)]
    feels_like: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
}

// The provider's own spelling wins when both are present.
impl MainBlock {
    pub fn min_k(&self) -> Option<f64> {
        self.temprature_min.or(self.temp_min)
    }

    pub fn max_k(&self) -> Option<f64> {
        self.temprature_max.or(self.temp_max)
    }

    pub fn feels_like_k(&self) -> Option<f64> {
        self.temprature_feels_like.or(self.feels_like)
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WeatherEntry {
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastItem {
    pub dt: i64,
    #[serde(default)]
    pub main: Option<MainBlock>,
    #[serde(default)]
    pub weather: Vec<WeatherEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct City {
    #[serde(default)]
    pub timezone: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastItem>,
    #[serde(default)]
    pub city: Option<City>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Wind {
    #[serde(default)]
    pub speed: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Precipitation {
    #[serde(default, alias = "1h")]
    pub amount: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Sys {
    #[serde(default)]
    pub sunrise: Option<i64>,
    #[serde(default)]
    pub sunset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentResponse {
    #[serde(default)]
    pub weather: Vec<WeatherEntry>,
    #[serde(default)]
    pub main: Option<MainBlock>,
    #[serde(default)]
    pub wind: Option<Wind>,
    #[serde(default)]
    pub rain: Option<Precipitation>,
    #[serde(default)]
    pub snow: Option<Precipitation>,
    #[serde(default)]
    pub sys: Option<Sys>,
    #[serde(default)]
    pub timezone: Option<i32>,
}

impl From<ForecastResponse> for RawForecast {
    fn from(response: ForecastResponse) -> Self {
        let points = response
            .list
            .into_iter()
            .map(|item| {
                let main = item.main.unwrap_or_default();
                RawForecastPoint {
                    timestamp: item.dt,
                    temp_min_k: main.min_k(),
                    temp_max_k: main.max_k(),
                    category: item.weather.into_iter().next().and_then(|w| w.main),
                }
            })
            .collect();

        RawForecast {
            points,
            utc_offset_secs: response.city.and_then(|c| c.timezone),
        }
    }
}

impl From<CurrentResponse> for RawCurrent {
    fn from(response: CurrentResponse) -> Self {
        let main = response.main.unwrap_or_default();
        let sys = response.sys.unwrap_or_default();
        RawCurrent {
            reading: RawCurrentWeather {
                description: response.weather.into_iter().next().and_then(|w| w.description),
                feels_like_k: main.feels_like_k(),
                temp_min_k: main.min_k(),
                temp_max_k: main.max_k(),
                humidity: main.humidity,
                wind_speed: response.wind.and_then(|w| w.speed),
                rain_mm: response.rain.and_then(|r| r.amount),
                snow_mm: response.snow.and_then(|s| s.amount),
                sunrise: sys.sunrise,
                sunset: sys.sunset,
            },
            utc_offset_secs: response.timezone,
        }
    }
}
