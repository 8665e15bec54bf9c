//! Vehicle position extractor

use domain::{Route, Trip, Vehicle, degrees_from_scaled};
use serde::{Deserialize, Deserializer, de::IgnoredAny};

use super::from_json;
use crate::error::ParseError;

/// Extract the vehicles currently tracked
///
/// A vehicle is inactive when its record carries an `isDeleted` key, whatever
/// the value. Coordinates are left unset when the service omits them.
pub fn extract_vehicles(body: &str) -> Result<Vec<Vehicle>, ParseError> {
    let raw: RawVehicles = from_json(body)?;
    Ok(raw.vehicles.into_iter().map(convert_vehicle).collect())
}

fn convert_vehicle(raw: RawVehicle) -> Vehicle {
    let trip = raw.trip_id.map(|trip_id| {
        let (route_name, direction) = match raw.name.as_deref() {
            Some(name) => {
                let (route_name, direction) = split_vehicle_name(name);
                (Some(route_name), direction)
            },
            None => (None, None),
        };
        Trip {
            id: Some(trip_id),
            route: route_name.map(Route::named),
            direction,
        }
    });

    Vehicle {
        id: Some(raw.id),
        active: Some(!raw.is_deleted),
        latitude: raw.latitude.map(degrees_from_scaled),
        longitude: raw.longitude.map(degrees_from_scaled),
        heading: raw.heading,
        category: raw.category,
        color: raw.color,
        trip,
    }
}

/// Split a vehicle's display name into route name and direction
///
/// Only the first space separates the two: `"20 Mały Płaszów P+R"` is route
/// `20` towards `Mały Płaszów P+R`. A name without a space is all route name.
#[must_use]
pub fn split_vehicle_name(name: &str) -> (String, Option<String>) {
    match name.split_once(' ') {
        Some((route_name, direction)) => (route_name.to_string(), Some(direction.to_string())),
        None => (name.to_string(), None),
    }
}

/// `true` whenever the key is present, regardless of its value
fn key_present<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(true)
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawVehicles {
    vehicles: Vec<RawVehicle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVehicle {
    id: String,
    #[serde(default, deserialize_with = "key_present")]
    is_deleted: bool,
    latitude: Option<f64>,
    longitude: Option<f64>,
    heading: Option<i32>,
    category: Option<String>,
    color: Option<String>,
    name: Option<String>,
    trip_id: Option<String>,
}
