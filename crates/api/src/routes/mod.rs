pub mod health;
pub mod weather;
pub mod weather_requests;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /weather-requests                    list, create
/// /weather-requests/{id}               get, partial update, delete
/// /weather-requests/{id}/export        download as JSON file
///
/// /weather/current                     current conditions (POST)
/// /weather/forecast                    normalized forecast series (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/weather-requests", weather_requests::router())
        .nest("/weather", weather::router())
}
