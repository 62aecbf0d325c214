pub mod weather;
pub mod weather_request;
