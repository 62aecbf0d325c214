//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod weather_request_repo;

pub use weather_request_repo::WeatherRequestRepo;
