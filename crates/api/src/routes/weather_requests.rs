//! Route definitions for stored weather requests.
//!
//! Mounted at `/weather-requests` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::weather_request;
use crate::state::AppState;

/// Weather request routes.
///
/// ```text
/// GET    /                   -> list_weather_requests
/// POST   /                   -> create_weather_request
/// GET    /{id}               -> get_weather_request
/// PATCH  /{id}               -> update_weather_request
/// DELETE /{id}               -> delete_weather_request
/// GET    /{id}/export        -> export_weather_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(weather_request::list_weather_requests)
                .post(weather_request::create_weather_request),
        )
        .route(
            "/{id}",
            get(weather_request::get_weather_request)
                .patch(weather_request::update_weather_request)
                .delete(weather_request::delete_weather_request),
        )
        .route("/{id}/export", get(weather_request::export_weather_request))
}
