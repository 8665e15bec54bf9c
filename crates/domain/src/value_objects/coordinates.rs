//! Scaled coordinate conversion
//!
//! The tracking service exchanges coordinates as integers counting
//! milliseconds of arc, i.e. decimal degrees multiplied by 3,600,000.

/// Number of upstream units per decimal degree
pub const COORDINATE_SCALE: f64 = 3_600_000.0;

/// Convert an upstream scaled coordinate to decimal degrees
#[must_use]
pub fn degrees_from_scaled(raw: f64) -> f64 {
    raw / COORDINATE_SCALE
}

/// Convert decimal degrees to the upstream scaled integer form
///
/// Truncates toward zero, matching how the service expects request bounds.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn scaled_from_degrees(degrees: f64) -> i64 {
    (degrees * COORDINATE_SCALE) as i64
}
