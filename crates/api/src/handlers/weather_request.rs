//! Handlers for stored weather requests.
//!
//! Create runs the aggregation flow (validate, fetch, filter, reduce, save);
//! the rest are plain reads and edits of the stored rows.

use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use weatherlog_core::date_range::{ensure_ordered, parse_date, validate_date_range};
use weatherlog_core::error::CoreError;
use weatherlog_core::forecast::{aggregate, ForecastPoint};
use weatherlog_core::location::LocationQuery;
use weatherlog_core::types::{DbId, Timestamp};
use weatherlog_db::models::weather_request::{
    CreateWeatherRequest, UpdateWeatherRequest, WeatherRequest,
};
use weatherlog_db::repositories::WeatherRequestRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

/// Body for `POST /weather-requests`.
#[derive(Debug, Deserialize)]
pub struct CreateWeatherRequestInput {
    #[serde(flatten)]
    pub location: LocationQuery,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Body for `PATCH /weather-requests/{id}`. Dates are `YYYY-MM-DD` strings.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateWeatherRequestInput {
    pub location_query: Option<String>,
    pub date_range_start: Option<String>,
    pub date_range_end: Option<String>,
    pub note: Option<String>,
}

/// Summary block returned after a create or update.
#[derive(Debug, Serialize)]
pub struct RequestSummary {
    pub location_query: String,
    pub date_range: String,
    pub overall_min_temp_c: Option<f64>,
    pub overall_max_temp_c: Option<f64>,
    pub request_timestamp: Timestamp,
}

/// Result of a create or update: summary plus the retained series.
#[derive(Debug, Serialize)]
pub struct WeatherRequestOutcome {
    pub id: DbId,
    pub summary: RequestSummary,
    pub detailed_forecast: Vec<ForecastPoint>,
    pub note: Option<String>,
}

impl From<WeatherRequest> for WeatherRequestOutcome {
    fn from(row: WeatherRequest) -> Self {
        let detailed_forecast = row.detailed_forecast();
        Self {
            id: row.id,
            summary: RequestSummary {
                date_range: format!("{} to {}", row.date_range_start, row.date_range_end),
                location_query: row.location_query,
                overall_min_temp_c: row.overall_min_temp_c,
                overall_max_temp_c: row.overall_max_temp_c,
                request_timestamp: row.request_timestamp,
            },
            detailed_forecast,
            note: row.note,
        }
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "WeatherRequest",
        id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /weather-requests
///
/// Fetch the forecast for a location, reduce it over the requested window,
/// and store the result.
pub async fn create_weather_request(
    State(state): State<AppState>,
    Json(input): Json<CreateWeatherRequestInput>,
) -> AppResult<impl IntoResponse> {
    input.location.validate()?;
    let range = validate_date_range(&input.start_date, &input.end_date, state.config.today())?;

    let forecast = state.weather.fetch_forecast(&input.location).await?;
    let offset = state.config.offset_for(forecast.utc_offset_secs);
    let summary = aggregate(&forecast.points, offset, &range)?;

    let mut record = CreateWeatherRequest::from_summary(input.location.label(), range, &summary)
        .map_err(|e| AppError::InternalError(format!("Failed to encode forecast detail: {e}")))?;
    record.note = input.note;

    let created = WeatherRequestRepo::create(&state.pool, &record).await?;

    tracing::info!(
        request_id = created.id,
        location = %created.location_query,
        start = %range.start,
        end = %range.end,
        points = summary.points.len(),
        "Weather request created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: WeatherRequestOutcome::from(created),
        }),
    ))
}

/// GET /weather-requests
///
/// List every stored request with its detail decoded.
pub async fn list_weather_requests(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = WeatherRequestRepo::list(&state.pool).await?;
    let views: Vec<_> = rows.into_iter().map(WeatherRequest::into_view).collect();
    Ok(Json(DataResponse { data: views }))
}

/// GET /weather-requests/{id}
pub async fn get_weather_request(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = WeatherRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(DataResponse {
        data: row.into_view(),
    }))
}

/// PATCH /weather-requests/{id}
///
/// Update the location label, date range, or note. Temperatures and the
/// stored series are never touched.
pub async fn update_weather_request(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWeatherRequestInput>,
) -> AppResult<impl IntoResponse> {
    let start = input.date_range_start.as_deref().map(parse_date).transpose()?;
    let end = input.date_range_end.as_deref().map(parse_date).transpose()?;

    if let Some(label) = &input.location_query {
        if label.trim().is_empty() {
            return Err(AppError::BadRequest(
                "location_query cannot be empty".to_string(),
            ));
        }
    }

    let existing = WeatherRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if start.is_some() || end.is_some() {
        ensure_ordered(
            start.unwrap_or(existing.date_range_start),
            end.unwrap_or(existing.date_range_end),
        )?;
    }

    let patch = UpdateWeatherRequest {
        location_query: input.location_query.map(|s| s.trim().to_string()),
        date_range_start: start,
        date_range_end: end,
        note: input.note,
    };

    let updated = WeatherRequestRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(request_id = id, "Weather request updated");

    Ok(Json(DataResponse {
        data: WeatherRequestOutcome::from(updated),
    }))
}

/// DELETE /weather-requests/{id}
///
/// Deleting an id that does not exist succeeds without doing anything.
pub async fn delete_weather_request(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = WeatherRequestRepo::delete(&state.pool, id).await?;

    if deleted {
        tracing::info!(request_id = id, "Weather request deleted");
    } else {
        tracing::debug!(request_id = id, "Delete of unknown weather request ignored");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /weather-requests/{id}/export
///
/// The stored request as a downloadable JSON file.
pub async fn export_weather_request(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = WeatherRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let body = serde_json::to_vec_pretty(&row.into_view())
        .map_err(|e| AppError::InternalError(format!("Failed to encode export: {e}")))?;

    Ok((
        [
            (CONTENT_TYPE, "application/json".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=weather_request_{id}.json"),
            ),
        ],
        body,
    ))
}
