//! Forecast aggregation.
//!
//! Turns the provider's multi-point series into the shape the service
//! stores: normalize each point, keep the ones inside the requested window,
//! and reduce them to overall temperature bounds.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::date_range::DateRange;
use crate::error::CoreError;
use crate::types::KELVIN_OFFSET;

/// Wall-clock layout used for a point's `time` field.
pub const POINT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A provider reading before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawForecastPoint {
    /// Unix timestamp (seconds, UTC).
    pub timestamp: i64,
    pub temp_min_k: Option<f64>,
    pub temp_max_k: Option<f64>,
    /// Provider's weather group, e.g. `Clouds`.
    pub category: Option<String>,
}

/// A normalized forecast point, as stored in a record's detail series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Local wall-clock time of the reading.
    #[serde(with = "point_time")]
    pub time: NaiveDateTime,
    pub min_c: Option<f64>,
    pub max_c: Option<f64>,
    pub weather: Option<String>,
}

impl ForecastPoint {
    /// Bring a point into canonical form.
    ///
    /// Minute precision, one-decimal temperatures, non-finite values dropped,
    /// bounds ordered, blank labels removed. Applying it twice changes nothing.
    pub fn normalized(self) -> Self {
        let time = self
            .time
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(self.time);

        let mut min_c = self.min_c.and_then(round_one_decimal);
        let mut max_c = self.max_c.and_then(round_one_decimal);
        if let (Some(lo), Some(hi)) = (min_c, max_c) {
            if lo > hi {
                min_c = Some(hi);
                max_c = Some(lo);
            }
        }

        let weather = self
            .weather
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty());

        Self {
            time,
            min_c,
            max_c,
            weather,
        }
    }
}

/// Overall bounds of a window plus the points that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSummary {
    pub overall_min_c: Option<f64>,
    pub overall_max_c: Option<f64>,
    pub points: Vec<ForecastPoint>,
}

/// Convert Kelvin to Celsius, rounded to one decimal.
pub fn kelvin_to_celsius(kelvin: f64) -> Option<f64> {
    round_one_decimal(kelvin - KELVIN_OFFSET)
}

fn round_one_decimal(value: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    Some((value * 10.0).round() / 10.0)
}

/// Normalize raw provider points at the given UTC offset.
///
/// Points whose timestamp chrono cannot represent are skipped; every other
/// field degrades to `None` rather than failing.
pub fn normalize_points(raw: &[RawForecastPoint], offset: FixedOffset) -> Vec<ForecastPoint> {
    raw.iter()
        .filter_map(|point| {
            let utc = DateTime::from_timestamp(point.timestamp, 0)?;
            Some(
                ForecastPoint {
                    time: utc.with_timezone(&offset).naive_local(),
                    min_c: point.temp_min_k.and_then(kelvin_to_celsius),
                    max_c: point.temp_max_k.and_then(kelvin_to_celsius),
                    weather: point.category.clone(),
                }
                .normalized(),
            )
        })
        .collect()
}

/// Keep the points whose local date falls inside `range`.
pub fn filter_window(points: Vec<ForecastPoint>, range: &DateRange) -> Vec<ForecastPoint> {
    points
        .into_iter()
        .filter(|p| range.contains(p.time.date()))
        .collect()
}

/// Filter to `range` and reduce to overall bounds.
///
/// Fails with [`CoreError::NoDataInRange`] when nothing survives the filter
/// or the survivors carry no temperature at all.
pub fn summarize(points: Vec<ForecastPoint>, range: &DateRange) -> Result<ForecastSummary, CoreError> {
    let points = filter_window(points, range);

    let mut overall_min_c = points.iter().filter_map(|p| p.min_c).reduce(f64::min);
    let mut overall_max_c = points.iter().filter_map(|p| p.max_c).reduce(f64::max);

    if overall_min_c.is_none() && overall_max_c.is_none() {
        return Err(CoreError::NoDataInRange);
    }

    // Bounds can come from different points when some lack one side.
    if let (Some(lo), Some(hi)) = (overall_min_c, overall_max_c) {
        if lo > hi {
            overall_min_c = Some(hi);
            overall_max_c = Some(lo);
        }
    }

    Ok(ForecastSummary {
        overall_min_c,
        overall_max_c,
        points,
    })
}

/// Normalize, filter and reduce in one step.
pub fn aggregate(
    raw: &[RawForecastPoint],
    offset: FixedOffset,
    range: &DateRange,
) -> Result<ForecastSummary, CoreError> {
    summarize(normalize_points(raw, offset), range)
}

mod point_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::POINT_TIME_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&time.format(POINT_TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, POINT_TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
