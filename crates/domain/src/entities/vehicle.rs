//! Vehicle entity

use serde::{Deserialize, Serialize};

use super::trip::Trip;

/// A tracked vehicle
///
/// Vehicles embedded in passages only carry an id and the trip; the
/// vehicle listing fills in position and presentation fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `false` once the service has marked the vehicle as deleted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Unset when the service does not know the position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Heading in degrees, unset when not reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Display color, e.g. `"0x000000"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip: Option<Trip>,
}

impl Vehicle {
    /// Position as `(latitude, longitude)` when both are known
    #[must_use]
    pub fn position(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}
