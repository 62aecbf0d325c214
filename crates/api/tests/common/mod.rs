#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, Response};
use axum::Router;
use chrono::{Days, FixedOffset, NaiveDate, TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use weatherlog_api::app::build_app;
use weatherlog_api::config::ServerConfig;
use weatherlog_api::state::AppState;
use weatherlog_core::current::RawCurrentWeather;
use weatherlog_core::forecast::RawForecastPoint;
use weatherlog_core::location::LocationQuery;
use weatherlog_db::DbPool;
use weatherlog_forecast::{ForecastConfig, ForecastError, RawCurrent, RawForecast, WeatherSource};

// ---------------------------------------------------------------------------
// Stub provider
// ---------------------------------------------------------------------------

/// Canned provider. `fail_status` turns every call into an API error.
#[derive(Debug, Clone, Default)]
pub struct StubWeather {
    pub forecast: RawForecast,
    pub current: RawCurrent,
    pub fail_status: Option<u16>,
}

impl StubWeather {
    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), ForecastError> {
        match self.fail_status {
            Some(status) => Err(ForecastError::Api {
                status,
                body: "stub failure".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl WeatherSource for StubWeather {
    async fn fetch_forecast(&self, _location: &LocationQuery) -> Result<RawForecast, ForecastError> {
        self.check()?;
        Ok(self.forecast.clone())
    }

    async fn fetch_current(&self, _place: &str) -> Result<RawCurrent, ForecastError> {
        self.check()?;
        Ok(self.current.clone())
    }
}

// ---------------------------------------------------------------------------
// Dates and series
// ---------------------------------------------------------------------------

/// Today (UTC) plus `n` days.
pub fn day(n: u64) -> NaiveDate {
    Utc::now().date_naive() + Days::new(n)
}

pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn point(date: NaiveDate, hour: u32, min_k: f64, max_k: f64, category: &str) -> RawForecastPoint {
    let at = Utc
        .from_utc_datetime(&date.and_hms_opt(hour, 0, 0).unwrap())
        .timestamp();
    RawForecastPoint {
        timestamp: at,
        temp_min_k: Some(min_k),
        temp_max_k: Some(max_k),
        category: Some(category.to_string()),
    }
}

/// Two points tomorrow (290/295 K and 288/300 K) and one the day after.
pub fn sample_forecast() -> RawForecast {
    RawForecast {
        points: vec![
            point(day(1), 6, 290.0, 295.0, "Clouds"),
            point(day(1), 15, 288.0, 300.0, "Clear"),
            point(day(2), 9, 280.0, 285.0, "Rain"),
        ],
        utc_offset_secs: Some(0),
    }
}

pub fn sample_current() -> RawCurrent {
    RawCurrent {
        reading: RawCurrentWeather {
            description: Some("scattered clouds".into()),
            feels_like_k: Some(293.15),
            temp_min_k: Some(288.15),
            temp_max_k: Some(298.15),
            humidity: Some(55.0),
            wind_speed: Some(4.1),
            ..RawCurrentWeather::default()
        },
        utc_offset_secs: Some(0),
    }
}

pub fn sample_weather() -> StubWeather {
    StubWeather {
        forecast: sample_forecast(),
        current: sample_current(),
        fail_status: None,
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        default_utc_offset: FixedOffset::east_opt(0).unwrap(),
        forecast: ForecastConfig::default(),
    }
}

/// A migrated in-memory database.
pub async fn test_pool() -> DbPool {
    let pool = weatherlog_db::create_memory_pool().await.unwrap();
    weatherlog_db::run_migrations(&pool).await.unwrap();
    pool
}

/// Build the full application router over the given pool and provider.
pub fn build_test_app(pool: DbPool, weather: StubWeather) -> Router {
    build_app(AppState {
        pool,
        config: Arc::new(test_config()),
        weather: Arc::new(weather),
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
