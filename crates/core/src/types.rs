/// Database primary keys are SQLite INTEGER rowids.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Offset between Kelvin and Celsius.
pub const KELVIN_OFFSET: f64 = 273.15;
