//! Integration tests for weather request persistence.
//!
//! Exercises the repository layer against a migrated in-memory database:
//! - Create and read back, including the detail series
//! - Partial updates leave omitted fields alone
//! - Delete of a missing row reports nothing deleted
//! - Schema checks reject inverted ranges

use chrono::NaiveDate;
use weatherlog_core::forecast::ForecastPoint;
use weatherlog_db::models::weather_request::{CreateWeatherRequest, UpdateWeatherRequest};
use weatherlog_db::repositories::WeatherRequestRepo;
use weatherlog_db::DbPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn test_pool() -> DbPool {
    let pool = weatherlog_db::create_memory_pool().await.unwrap();
    weatherlog_db::run_migrations(&pool).await.unwrap();
    pool
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_points() -> Vec<ForecastPoint> {
    vec![
        ForecastPoint {
            time: date(2025, 6, 10).and_hms_opt(12, 0, 0).unwrap(),
            min_c: Some(16.9),
            max_c: Some(21.9),
            weather: Some("Clouds".into()),
        },
        ForecastPoint {
            time: date(2025, 6, 10).and_hms_opt(15, 0, 0).unwrap(),
            min_c: Some(14.9),
            max_c: Some(26.9),
            weather: None,
        },
    ]
}

fn new_request(location: &str) -> CreateWeatherRequest {
    CreateWeatherRequest {
        location_query: location.to_string(),
        date_range_start: date(2025, 6, 10),
        date_range_end: date(2025, 6, 11),
        overall_min_temp_c: Some(14.9),
        overall_max_temp_c: Some(26.9),
        full_forecast_json: serde_json::to_string(&sample_points()).unwrap(),
        note: None,
    }
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_and_find_round_trip() {
    let pool = test_pool().await;

    let created = WeatherRequestRepo::create(&pool, &new_request("Berlin"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.location_query, "Berlin");
    assert_eq!(created.date_range_start, date(2025, 6, 10));

    let found = WeatherRequestRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("row should exist");
    assert_eq!(found.overall_min_temp_c, Some(14.9));
    assert_eq!(found.overall_max_temp_c, Some(26.9));
    assert_eq!(found.request_timestamp, created.request_timestamp);
    assert_eq!(found.detailed_forecast(), sample_points());
}

#[tokio::test]
async fn find_missing_returns_none() {
    let pool = test_pool().await;
    let found = WeatherRequestRepo::find_by_id(&pool, 999).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn list_returns_all_in_insertion_order() {
    let pool = test_pool().await;
    WeatherRequestRepo::create(&pool, &new_request("Berlin")).await.unwrap();
    WeatherRequestRepo::create(&pool, &new_request("Oslo")).await.unwrap();

    let all = WeatherRequestRepo::list(&pool).await.unwrap();
    let names: Vec<_> = all.iter().map(|r| r.location_query.as_str()).collect();
    assert_eq!(names, ["Berlin", "Oslo"]);
}

#[tokio::test]
async fn unreadable_detail_decodes_as_empty() {
    let pool = test_pool().await;
    let mut input = new_request("Berlin");
    input.full_forecast_json = "{not json".to_string();

    let created = WeatherRequestRepo::create(&pool, &input).await.unwrap();
    let view = created.into_view();
    assert!(view.detailed_forecast.is_empty());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let pool = test_pool().await;
    let created = WeatherRequestRepo::create(&pool, &new_request("Berlin"))
        .await
        .unwrap();

    let patch = UpdateWeatherRequest {
        note: Some("pack an umbrella".into()),
        ..UpdateWeatherRequest::default()
    };
    let updated = WeatherRequestRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(updated.note.as_deref(), Some("pack an umbrella"));
    assert_eq!(updated.location_query, "Berlin");
    assert_eq!(updated.date_range_start, created.date_range_start);
    assert_eq!(updated.date_range_end, created.date_range_end);
    assert_eq!(updated.overall_min_temp_c, created.overall_min_temp_c);
    assert_eq!(updated.full_forecast_json, created.full_forecast_json);
}

#[tokio::test]
async fn update_dates_and_location() {
    let pool = test_pool().await;
    let created = WeatherRequestRepo::create(&pool, &new_request("Berlin"))
        .await
        .unwrap();

    let patch = UpdateWeatherRequest {
        location_query: Some("Berlin Mitte".into()),
        date_range_end: Some(date(2025, 6, 14)),
        ..UpdateWeatherRequest::default()
    };
    let updated = WeatherRequestRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.location_query, "Berlin Mitte");
    assert_eq!(updated.date_range_start, date(2025, 6, 10));
    assert_eq!(updated.date_range_end, date(2025, 6, 14));
    assert_eq!(updated.note, None);
}

#[tokio::test]
async fn update_missing_returns_none() {
    let pool = test_pool().await;
    let result = WeatherRequestRepo::update(&pool, 42, &UpdateWeatherRequest::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn inverted_range_violates_check() {
    let pool = test_pool().await;
    let mut input = new_request("Berlin");
    input.date_range_start = date(2025, 6, 12);
    input.date_range_end = date(2025, 6, 11);

    let result = WeatherRequestRepo::create(&pool, &input).await;
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_row() {
    let pool = test_pool().await;
    let created = WeatherRequestRepo::create(&pool, &new_request("Berlin"))
        .await
        .unwrap();

    assert!(WeatherRequestRepo::delete(&pool, created.id).await.unwrap());
    assert!(WeatherRequestRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn delete_missing_reports_false() {
    let pool = test_pool().await;
    assert!(!WeatherRequestRepo::delete(&pool, 7).await.unwrap());
}
