//! Response extractors
//!
//! Pure functions mapping raw response bodies onto domain records. Each
//! extractor deserializes the body into private `Raw*` types mirroring the
//! wire format, then converts them field by field. Missing required keys,
//! unknown status values and malformed clock times fail the whole
//! extraction; the only defaulted field is a route's `directions`.

use std::borrow::Cow;

use serde::de::DeserializeOwned;

use crate::error::ParseError;

mod lookup;
mod passages;
mod paths;
mod routes;
mod stops;
mod vehicles;

pub use lookup::{
    extract_autocomplete_stops, extract_autocomplete_stops_json, extract_fulltext,
    extract_near_stops, extract_stops_by_character,
};
pub use passages::{
    PassageContext, extract_stop_passages, extract_stop_point_passages, extract_trip_passages,
};
pub use paths::{extract_paths, extract_route_paths, extract_vehicle_paths};
pub use routes::{extract_route_stops, extract_routes};
pub use stops::{extract_stop, extract_stop_point, extract_stop_points, extract_stops};
pub use vehicles::{extract_vehicles, split_vehicle_name};

/// Deserialize a JSON body into a raw wire type
fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ParseError> {
    Ok(serde_json::from_str(body)?)
}

/// Resolve named and numeric HTML entities; unrecognised ones are kept verbatim
fn unescape_html(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}
