//! Path entity

use serde::{Deserialize, Serialize};

/// A drawable polyline for a route or vehicle track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    /// Display color, e.g. `"#f89f05"`
    pub color: String,
    /// Ordered `(latitude, longitude)` waypoints in decimal degrees
    pub waypoints: Vec<(f64, f64)>,
}
