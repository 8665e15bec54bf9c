//! Value Objects - Immutable, identity-less domain primitives

mod bounding_box;
mod coordinates;
mod passage_status;

pub use bounding_box::BoundingBox;
pub use coordinates::{COORDINATE_SCALE, degrees_from_scaled, scaled_from_degrees};
pub use passage_status::PassageStatus;
