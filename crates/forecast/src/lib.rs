//! Client for the upstream weather provider.
//!
//! [`WeatherSource`] is the seam the API depends on; [`ForecastClient`] is
//! the production implementation over HTTP. Wire types stay private to this
//! crate and are mapped onto the provider-agnostic raw types in
//! `weatherlog_core`.

pub mod api;
pub mod source;
mod wire;

pub use api::{ForecastClient, ForecastConfig, ForecastError};
pub use source::{RawCurrent, RawForecast, WeatherSource};
