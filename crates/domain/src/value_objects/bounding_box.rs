//! Geographic bounding box value object

use serde::{Deserialize, Serialize};
use std::fmt;

use super::coordinates::scaled_from_degrees;
use crate::errors::DomainError;

/// A latitude/longitude rectangle in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Edges")]
pub struct BoundingBox {
    min_latitude: f64,
    max_latitude: f64,
    min_longitude: f64,
    max_longitude: f64,
}

impl BoundingBox {
    /// Create a bounding box, rejecting inverted or off-globe ranges
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBoundingBox` if an edge is not finite,
    /// lies outside ±90° latitude or ±180° longitude, or a minimum exceeds
    /// its maximum.
    pub fn new(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Result<Self, DomainError> {
        check_edge("min_latitude", min_latitude, 90.0)?;
        check_edge("max_latitude", max_latitude, 90.0)?;
        check_edge("min_longitude", min_longitude, 180.0)?;
        check_edge("max_longitude", max_longitude, 180.0)?;

        if min_latitude > max_latitude {
            return Err(DomainError::InvalidBoundingBox(format!(
                "min_latitude {min_latitude} > max_latitude {max_latitude}"
            )));
        }
        if min_longitude > max_longitude {
            return Err(DomainError::InvalidBoundingBox(format!(
                "min_longitude {min_longitude} > max_longitude {max_longitude}"
            )));
        }
        Ok(Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        })
    }

    /// The whole globe
    #[must_use]
    pub const fn world() -> Self {
        Self {
            min_latitude: -90.0,
            max_latitude: 90.0,
            min_longitude: -180.0,
            max_longitude: 180.0,
        }
    }

    #[must_use]
    pub const fn min_latitude(&self) -> f64 {
        self.min_latitude
    }

    #[must_use]
    pub const fn max_latitude(&self) -> f64 {
        self.max_latitude
    }

    #[must_use]
    pub const fn min_longitude(&self) -> f64 {
        self.min_longitude
    }

    #[must_use]
    pub const fn max_longitude(&self) -> f64 {
        self.max_longitude
    }

    /// Scaled `(left, bottom, right, top)` edges as the service expects them
    #[must_use]
    pub fn scaled_edges(&self) -> (i64, i64, i64, i64) {
        (
            scaled_from_degrees(self.min_longitude),
            scaled_from_degrees(self.min_latitude),
            scaled_from_degrees(self.max_longitude),
            scaled_from_degrees(self.max_latitude),
        )
    }
}

fn check_edge(name: &str, value: f64, limit: f64) -> Result<(), DomainError> {
    if value.is_finite() && (-limit..=limit).contains(&value) {
        Ok(())
    } else {
        Err(DomainError::InvalidBoundingBox(format!(
            "{name} {value} outside [-{limit}, {limit}]"
        )))
    }
}

/// Serialized form, validated through `BoundingBox::new`
#[derive(Deserialize)]
struct Edges {
    min_latitude: f64,
    max_latitude: f64,
    min_longitude: f64,
    max_longitude: f64,
}

impl TryFrom<Edges> for BoundingBox {
    type Error = DomainError;

    fn try_from(edges: Edges) -> Result<Self, Self::Error> {
        Self::new(
            edges.min_latitude,
            edges.max_latitude,
            edges.min_longitude,
            edges.max_longitude,
        )
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::world()
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.6}, {:.6}] x [{:.6}, {:.6}]",
            self.min_latitude, self.max_latitude, self.min_longitude, self.max_longitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_world() {
        assert_eq!(BoundingBox::default(), BoundingBox::world());
    }

    #[test]
    fn world_edges() {
        let (left, bottom, right, top) = BoundingBox::world().scaled_edges();
        assert_eq!(left, -648_000_000);
        assert_eq!(bottom, -324_000_000);
        assert_eq!(right, 648_000_000);
        assert_eq!(top, 324_000_000);
    }

    #[test]
    fn quarter_degree_edges() {
        let bbox = BoundingBox::new(50.5, 50.75, 19.25, 19.5).expect("valid box");
        let (left, bottom, right, top) = bbox.scaled_edges();
        assert_eq!(left, 69_300_000);
        assert_eq!(bottom, 181_800_000);
        assert_eq!(right, 70_200_000);
        assert_eq!(top, 182_700_000);
    }

    #[test]
    fn inverted_latitude_rejected() {
        assert!(BoundingBox::new(51.0, 50.0, 19.0, 20.0).is_err());
    }

    #[test]
    fn inverted_longitude_rejected() {
        assert!(BoundingBox::new(50.0, 51.0, 20.0, 19.0).is_err());
    }

    #[test]
    fn world_limits_accepted() {
        assert_eq!(
            BoundingBox::new(-90.0, 90.0, -180.0, 180.0),
            Ok(BoundingBox::world())
        );
    }

    #[test]
    fn non_finite_edges_rejected() {
        assert!(BoundingBox::new(f64::NAN, 50.0, 19.0, 20.0).is_err());
        assert!(BoundingBox::new(50.0, f64::NAN, 19.0, 20.0).is_err());
        assert!(BoundingBox::new(50.0, 51.0, f64::NEG_INFINITY, 20.0).is_err());
        assert!(BoundingBox::new(50.0, 51.0, 19.0, f64::INFINITY).is_err());
    }

    #[test]
    fn off_globe_edges_rejected() {
        assert!(BoundingBox::new(-90.5, 50.0, 19.0, 20.0).is_err());
        assert!(BoundingBox::new(50.0, 200.0, 19.0, 20.0).is_err());
        assert!(BoundingBox::new(50.0, 51.0, -181.0, 20.0).is_err());
        assert!(BoundingBox::new(50.0, 51.0, 19.0, 180.25).is_err());
    }

    #[test]
    fn off_globe_message_names_edge() {
        let err = BoundingBox::new(50.0, 200.0, 19.0, 20.0).unwrap_err();
        assert!(err.to_string().contains("max_latitude 200"));
    }

    #[test]
    fn deserialize_validates_edges() {
        let valid: BoundingBox = serde_json::from_str(
            r#"{"min_latitude": 50.5, "max_latitude": 50.75, "min_longitude": 19.25, "max_longitude": 19.5}"#,
        )
        .expect("valid box");
        assert_eq!(valid, BoundingBox::new(50.5, 50.75, 19.25, 19.5).unwrap());

        let invalid = serde_json::from_str::<BoundingBox>(
            r#"{"min_latitude": 50.5, "max_latitude": 95.0, "min_longitude": 19.25, "max_longitude": 19.5}"#,
        );
        assert!(invalid.is_err());
    }

    #[test]
    fn display_lists_ranges() {
        let display = BoundingBox::world().to_string();
        assert!(display.contains("-90.000000"));
        assert!(display.contains("180.000000"));
    }
}
