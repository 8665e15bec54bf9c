//! Stop and stop point extractors

use domain::{Stop, StopPoint, degrees_from_scaled};
use serde::Deserialize;

use super::from_json;
use crate::error::ParseError;

/// Extract stops inside a bounding box; coordinates are converted to degrees
pub fn extract_stops(body: &str) -> Result<Vec<Stop>, ParseError> {
    let raw: RawGeoStops = from_json(body)?;
    Ok(raw
        .stops
        .into_iter()
        .map(|stop| Stop {
            id: Some(stop.id),
            name: Some(stop.name),
            number: Some(stop.short_name),
            category: Some(stop.category),
            latitude: Some(degrees_from_scaled(stop.latitude)),
            longitude: Some(degrees_from_scaled(stop.longitude)),
        })
        .collect())
}

/// Extract stop points inside a bounding box; coordinates are converted to degrees
pub fn extract_stop_points(body: &str) -> Result<Vec<StopPoint>, ParseError> {
    let raw: RawGeoStopPoints = from_json(body)?;
    Ok(raw
        .stop_points
        .into_iter()
        .map(|stop_point| StopPoint {
            id: Some(stop_point.id),
            name: Some(stop_point.name),
            code: Some(stop_point.stop_point),
            category: Some(stop_point.category),
            label: stop_point.label,
            latitude: Some(degrees_from_scaled(stop_point.latitude)),
            longitude: Some(degrees_from_scaled(stop_point.longitude)),
        })
        .collect())
}

/// Extract a single stop looked up by number
pub fn extract_stop(body: &str) -> Result<Stop, ParseError> {
    let raw: RawStopInfo = from_json(body)?;
    Ok(Stop {
        id: Some(raw.id),
        name: Some(raw.passenger_name),
        ..Stop::default()
    })
}

/// Extract a single stop point looked up by code
pub fn extract_stop_point(body: &str) -> Result<StopPoint, ParseError> {
    let raw: RawStopPointInfo = from_json(body)?;
    Ok(StopPoint {
        id: Some(raw.id),
        name: Some(raw.passenger_name),
        code: Some(raw.stop_point_code),
        ..StopPoint::default()
    })
}

// --- Raw API response types for deserialization ---

/// Stop listed with id, name and number, as in route stops and character lookups
#[derive(Debug, Deserialize)]
pub(super) struct RawNumberedStop {
    id: String,
    name: String,
    number: String,
}

impl RawNumberedStop {
    pub(super) fn into_stop(self) -> Stop {
        Stop {
            id: Some(self.id),
            name: Some(self.name),
            number: Some(self.number),
            ..Stop::default()
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawGeoStops {
    stops: Vec<RawGeoStop>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGeoStop {
    id: String,
    name: String,
    short_name: String,
    category: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGeoStopPoints {
    stop_points: Vec<RawGeoStopPoint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGeoStopPoint {
    id: String,
    name: String,
    stop_point: String,
    category: String,
    label: Option<String>,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStopInfo {
    id: String,
    passenger_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStopPointInfo {
    id: String,
    passenger_name: String,
    stop_point_code: String,
}
