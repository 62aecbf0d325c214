//! Pass-through provider routes, mounted at `/weather`.

use axum::routing::post;
use axum::Router;

use crate::handlers::weather;
use crate::state::AppState;

/// ```text
/// POST   /current            -> current_weather
/// POST   /forecast           -> forecast
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/current", post(weather::current_weather))
        .route("/forecast", post(weather::forecast))
}
