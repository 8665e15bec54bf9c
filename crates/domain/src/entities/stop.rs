//! Stop entity

use serde::{Deserialize, Serialize};

/// A rider-facing named location
///
/// Every field is optional: each endpoint fills only what it returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Internal service identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Short human-facing stop number, e.g. `"131"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Vehicle category served (`"tram"`, `"bus"`, `"other"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Latitude in decimal degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Stop {
    /// A stop known only by its display name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
