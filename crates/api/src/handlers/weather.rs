//! Pass-through lookups against the weather provider. Nothing is stored.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use weatherlog_core::current::summarize_current;
use weatherlog_core::error::CoreError;
use weatherlog_core::forecast::normalize_points;
use weatherlog_core::location::LocationQuery;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `POST /weather/current`: a single place name.
#[derive(Debug, Deserialize)]
pub struct CurrentWeatherInput {
    #[serde(default, alias = "Location")]
    pub location: Option<String>,
}

/// POST /weather/current
///
/// Current conditions for a named place, in Celsius and local clock time.
pub async fn current_weather(
    State(state): State<AppState>,
    Json(input): Json<CurrentWeatherInput>,
) -> AppResult<impl IntoResponse> {
    let place = input
        .location
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or(CoreError::MissingLocation)?;

    let current = state.weather.fetch_current(place).await?;
    let offset = state.config.offset_for(current.utc_offset_secs);

    Ok(Json(DataResponse {
        data: summarize_current(&current.reading, offset),
    }))
}

/// POST /weather/forecast
///
/// The provider's full series, normalized but not filtered or stored.
pub async fn forecast(
    State(state): State<AppState>,
    Json(location): Json<LocationQuery>,
) -> AppResult<impl IntoResponse> {
    location.validate()?;

    let forecast = state.weather.fetch_forecast(&location).await?;
    let offset = state.config.offset_for(forecast.utc_offset_secs);
    let points = normalize_points(&forecast.points, offset);

    tracing::debug!(location = %location.label(), points = points.len(), "Forecast proxied");

    Ok(Json(DataResponse { data: points }))
}
