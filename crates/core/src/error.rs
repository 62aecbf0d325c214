use crate::types::DbId;

/// Closed set of domain failures.
///
/// Each variant maps to exactly one HTTP status at the API boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Malformed date '{0}': expected YYYY-MM-DD")]
    MalformedDate(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Must provide location name, coordinates, or zip code")]
    MissingLocation,

    #[error("No forecast data available for the specified location/date range")]
    NoDataInRange,

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}
