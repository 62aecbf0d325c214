//! Stored weather request model.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use weatherlog_core::date_range::DateRange;
use weatherlog_core::forecast::{ForecastPoint, ForecastSummary};
use weatherlog_core::types::{DbId, Timestamp};

/// A row from the `weather_requests` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WeatherRequest {
    pub id: DbId,
    pub location_query: String,
    pub date_range_start: NaiveDate,
    pub date_range_end: NaiveDate,
    pub request_timestamp: Timestamp,
    pub overall_min_temp_c: Option<f64>,
    pub overall_max_temp_c: Option<f64>,
    /// Detailed series as stored; see [`WeatherRequest::detailed_forecast`].
    pub full_forecast_json: String,
    pub note: Option<String>,
}

impl WeatherRequest {
    /// Decode the stored series.
    ///
    /// A row whose JSON no longer parses yields an empty series.
    pub fn detailed_forecast(&self) -> Vec<ForecastPoint> {
        match serde_json::from_str::<Vec<ForecastPoint>>(&self.full_forecast_json) {
            Ok(points) => points.into_iter().map(ForecastPoint::normalized).collect(),
            Err(e) => {
                tracing::warn!(id = self.id, error = %e, "Stored forecast detail is unreadable");
                Vec::new()
            }
        }
    }

    /// Row with its detail series decoded for clients.
    pub fn into_view(self) -> WeatherRequestView {
        let detailed_forecast = self.detailed_forecast();
        WeatherRequestView {
            id: self.id,
            location_query: self.location_query,
            date_range_start: self.date_range_start,
            date_range_end: self.date_range_end,
            request_timestamp: self.request_timestamp,
            overall_min_temp_c: self.overall_min_temp_c,
            overall_max_temp_c: self.overall_max_temp_c,
            detailed_forecast,
            note: self.note,
        }
    }
}

/// Client-facing shape of a stored request: detail as structured data.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherRequestView {
    pub id: DbId,
    pub location_query: String,
    pub date_range_start: NaiveDate,
    pub date_range_end: NaiveDate,
    pub request_timestamp: Timestamp,
    pub overall_min_temp_c: Option<f64>,
    pub overall_max_temp_c: Option<f64>,
    pub detailed_forecast: Vec<ForecastPoint>,
    pub note: Option<String>,
}

/// DTO for inserting a new weather request.
#[derive(Debug, Clone)]
pub struct CreateWeatherRequest {
    pub location_query: String,
    pub date_range_start: NaiveDate,
    pub date_range_end: NaiveDate,
    pub overall_min_temp_c: Option<f64>,
    pub overall_max_temp_c: Option<f64>,
    pub full_forecast_json: String,
    pub note: Option<String>,
}

impl CreateWeatherRequest {
    /// Build an insert from an aggregated window.
    pub fn from_summary(
        location_query: String,
        range: DateRange,
        summary: &ForecastSummary,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            location_query,
            date_range_start: range.start,
            date_range_end: range.end,
            overall_min_temp_c: summary.overall_min_c,
            overall_max_temp_c: summary.overall_max_c,
            full_forecast_json: serde_json::to_string(&summary.points)?,
            note: None,
        })
    }
}

/// DTO for a partial update. Weather fields are deliberately absent.
#[derive(Debug, Clone, Default)]
pub struct UpdateWeatherRequest {
    pub location_query: Option<String>,
    pub date_range_start: Option<NaiveDate>,
    pub date_range_end: Option<NaiveDate>,
    pub note: Option<String>,
}
