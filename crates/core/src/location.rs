//! Location identifiers accepted by the forecast lookups.
//!
//! A caller identifies a place by name, by coordinates, or by zip code.
//! Field aliases keep the capitalised keys older clients send working.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One way (or several) of naming a location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationQuery {
    #[serde(default, alias = "Location")]
    pub location: Option<String>,
    #[serde(default, alias = "Latitude")]
    pub latitude: Option<f64>,
    #[serde(default, alias = "Longitude")]
    pub longitude: Option<f64>,
    #[serde(default, alias = "zip")]
    pub zipcode: Option<String>,
}

impl LocationQuery {
    /// Query by place name only.
    pub fn place(name: impl Into<String>) -> Self {
        Self {
            location: Some(name.into()),
            ..Self::default()
        }
    }

    /// Non-blank place name, if any.
    pub fn place_name(&self) -> Option<&str> {
        non_blank(self.location.as_deref())
    }

    /// Non-blank zip code, if any.
    pub fn zip(&self) -> Option<&str> {
        non_blank(self.zipcode.as_deref())
    }

    /// Both coordinates, when both are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    /// Require at least one usable identifier and sane coordinates.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(lat) = self.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(CoreError::Validation(format!(
                    "Latitude {lat} must be between -90 and 90"
                )));
            }
        }
        if let Some(lon) = self.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(CoreError::Validation(format!(
                    "Longitude {lon} must be between -180 and 180"
                )));
            }
        }

        if self.place_name().is_none() && self.coordinates().is_none() && self.zip().is_none() {
            return Err(CoreError::MissingLocation);
        }
        Ok(())
    }

    /// Label persisted as `location_query`: place, then zip, then coordinates.
    pub fn label(&self) -> String {
        if let Some(place) = self.place_name() {
            return place.to_string();
        }
        if let Some(zip) = self.zip() {
            return zip.to_string();
        }
        match self.coordinates() {
            Some((lat, lon)) => format!("Lat:{lat}, Lon:{lon}"),
            None => String::new(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
