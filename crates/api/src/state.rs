use std::sync::Arc;

use weatherlog_forecast::WeatherSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted and the rest sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: weatherlog_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Upstream forecast provider.
    pub weather: Arc<dyn WeatherSource>,
}
