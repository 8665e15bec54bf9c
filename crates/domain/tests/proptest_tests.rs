//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{
    BoundingBox, COORDINATE_SCALE, PassageStatus, degrees_from_scaled, scaled_from_degrees,
};
use proptest::prelude::*;

// ============================================================================
// Coordinate Conversion Property Tests
// ============================================================================

#[allow(clippy::cast_precision_loss)]
mod coordinate_tests {
    use super::*;

    proptest! {
        #[test]
        fn decoding_divides_by_scale(raw in -648_000_000i64..=648_000_000i64) {
            let raw = raw as f64;
            let degrees = degrees_from_scaled(raw);
            prop_assert!((degrees - raw / 3_600_000.0).abs() < 1e-12);
        }

        #[test]
        fn decoded_coordinates_stay_in_range(raw in -648_000_000i64..=648_000_000i64) {
            let degrees = degrees_from_scaled(raw as f64);
            prop_assert!((-180.0..=180.0).contains(&degrees));
        }

        #[test]
        fn integer_round_trip_is_close(raw in -648_000_000i64..=648_000_000i64) {
            let encoded = scaled_from_degrees(degrees_from_scaled(raw as f64));
            prop_assert!((encoded - raw).abs() <= 1);
        }

        #[test]
        fn encoding_never_overshoots(degrees in -180.0f64..=180.0f64) {
            let encoded = scaled_from_degrees(degrees) as f64;
            prop_assert!(encoded.abs() <= (degrees * COORDINATE_SCALE).abs());
        }
    }
}

// ============================================================================
// BoundingBox Property Tests
// ============================================================================

mod bounding_box_tests {
    use super::*;

    proptest! {
        #[test]
        fn ordered_boxes_are_accepted(
            lat_a in -90.0f64..=90.0f64,
            lat_b in -90.0f64..=90.0f64,
            lon_a in -180.0f64..=180.0f64,
            lon_b in -180.0f64..=180.0f64
        ) {
            let bbox = BoundingBox::new(
                lat_a.min(lat_b),
                lat_a.max(lat_b),
                lon_a.min(lon_b),
                lon_a.max(lon_b),
            );
            prop_assert!(bbox.is_ok());

            let (left, bottom, right, top) = bbox.unwrap().scaled_edges();
            prop_assert!(left <= right);
            prop_assert!(bottom <= top);
        }

        #[test]
        fn off_globe_latitude_is_rejected(
            lat in prop_oneof![-1.0e6f64..-90.001f64, 90.001f64..1.0e6f64]
        ) {
            prop_assert!(BoundingBox::new(lat.min(0.0), lat.max(0.0), 19.0, 20.0).is_err());
        }
    }
}

// ============================================================================
// PassageStatus Property Tests
// ============================================================================

mod passage_status_tests {
    use super::*;

    proptest! {
        #[test]
        fn only_wire_values_parse(s in "[A-Za-z]{0,12}") {
            let parsed = s.parse::<PassageStatus>();
            let known = matches!(s.as_str(), "PREDICTED" | "PLANNED" | "STOPPING" | "DEPARTED");
            prop_assert_eq!(parsed.is_ok(), known);
        }
    }
}
