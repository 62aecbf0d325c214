//! Repository for the `weather_requests` table.

use chrono::Utc;
use weatherlog_core::types::DbId;

use crate::models::weather_request::{
    CreateWeatherRequest, UpdateWeatherRequest, WeatherRequest,
};
use crate::DbPool;

/// Column list for weather_requests queries.
const COLUMNS: &str = "id, location_query, date_range_start, date_range_end, request_timestamp, \
    overall_min_temp_c, overall_max_temp_c, full_forecast_json, note";

/// Provides CRUD operations for stored weather requests.
pub struct WeatherRequestRepo;

impl WeatherRequestRepo {
    /// Insert a new request stamped with the current time, returning the row.
    pub async fn create(
        pool: &DbPool,
        input: &CreateWeatherRequest,
    ) -> Result<WeatherRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO weather_requests
                (location_query, date_range_start, date_range_end, request_timestamp,
                 overall_min_temp_c, overall_max_temp_c, full_forecast_json, note)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WeatherRequest>(&query)
            .bind(&input.location_query)
            .bind(input.date_range_start)
            .bind(input.date_range_end)
            .bind(Utc::now())
            .bind(input.overall_min_temp_c)
            .bind(input.overall_max_temp_c)
            .bind(&input.full_forecast_json)
            .bind(&input.note)
            .fetch_one(pool)
            .await
    }

    /// Find a request by its ID.
    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<WeatherRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weather_requests WHERE id = $1");
        sqlx::query_as::<_, WeatherRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every stored request, oldest first.
    pub async fn list(pool: &DbPool) -> Result<Vec<WeatherRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weather_requests ORDER BY id ASC");
        sqlx::query_as::<_, WeatherRequest>(&query)
            .fetch_all(pool)
            .await
    }

    /// Apply the supplied fields, leaving omitted ones untouched.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateWeatherRequest,
    ) -> Result<Option<WeatherRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE weather_requests SET
                location_query = COALESCE($2, location_query),
                date_range_start = COALESCE($3, date_range_start),
                date_range_end = COALESCE($4, date_range_end),
                note = COALESCE($5, note)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WeatherRequest>(&query)
            .bind(id)
            .bind(&input.location_query)
            .bind(input.date_range_start)
            .bind(input.date_range_end)
            .bind(&input.note)
            .fetch_optional(pool)
            .await
    }

    /// Delete a request by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM weather_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
