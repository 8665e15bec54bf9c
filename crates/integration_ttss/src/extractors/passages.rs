//! Passage extractors for stops, stop points and trips

use chrono::{DateTime, FixedOffset, TimeDelta};
use domain::{Passage, PassageStatus, Route, Stop, Trip, Vehicle};
use serde::Deserialize;

use super::{from_json, routes::RawRoute};
use crate::{
    error::ParseError,
    models::{StopPassages, TripPassages},
    time::{parse_time, round_to_nearest_minute},
};

/// The instant every passage of one response is measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassageContext {
    /// Wall-clock time captured once before the request
    pub now: DateTime<FixedOffset>,
    /// Round each computed instant to the nearest minute
    pub round_to_minute: bool,
}

impl PassageContext {
    #[must_use]
    pub const fn new(now: DateTime<FixedOffset>, round_to_minute: bool) -> Self {
        Self {
            now,
            round_to_minute,
        }
    }

    /// Absolute instant of a passage `relative_secs` away from `now`
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidRelativeTime` if the instant, or its
    /// rounding, falls outside the representable date range.
    pub fn instant(&self, relative_secs: i64) -> Result<DateTime<FixedOffset>, ParseError> {
        let out_of_range = || ParseError::InvalidRelativeTime(relative_secs);

        let dt = TimeDelta::try_seconds(relative_secs)
            .and_then(|delta| self.now.checked_add_signed(delta))
            .ok_or_else(out_of_range)?;

        if !self.round_to_minute {
            return Ok(dt);
        }

        // rounding moves the instant by less than a minute either way
        let minute = TimeDelta::minutes(1);
        if dt.checked_add_signed(minute).is_none() || dt.checked_sub_signed(minute).is_none() {
            return Err(out_of_range());
        }
        Ok(round_to_nearest_minute(dt))
    }
}

/// Extract the passages at a stop
///
/// Old passages come first, then upcoming ones, each segment in response
/// order. Every passage embeds the stop, its route and trip, and the
/// assigned vehicle when the service reports one.
pub fn extract_stop_passages(
    body: &str,
    context: &PassageContext,
) -> Result<StopPassages, ParseError> {
    let raw: RawStopPassages = from_json(body)?;
    let stop = Stop::named(raw.stop_name);

    let mut passages = Vec::with_capacity(raw.old.len() + raw.actual.len());
    for (segment, old) in [(raw.old, true), (raw.actual, false)] {
        for passage in segment {
            passages.push(convert_stop_passage(passage, old, &stop, context)?);
        }
    }

    Ok(StopPassages {
        stop,
        routes: raw.routes.into_iter().map(RawRoute::into_route).collect(),
        passages,
    })
}

/// Extract the passages at a stop point; same format as stop passages
pub fn extract_stop_point_passages(
    body: &str,
    context: &PassageContext,
) -> Result<StopPassages, ParseError> {
    extract_stop_passages(body, context)
}

fn convert_stop_passage(
    raw: RawStopPassage,
    old: bool,
    stop: &Stop,
    context: &PassageContext,
) -> Result<Passage, ParseError> {
    let route = Route {
        id: Some(raw.route_id),
        ..Route::named(raw.pattern_text)
    };
    let trip = Trip {
        id: Some(raw.trip_id),
        route: Some(route.clone()),
        direction: Some(raw.direction),
    };
    let vehicle = raw.vehicle_id.map(|id| Vehicle {
        id: Some(id),
        trip: Some(trip.clone()),
        ..Vehicle::default()
    });

    Ok(Passage {
        id: Some(raw.passage_id),
        old: Some(old),
        status: Some(raw.status.parse::<PassageStatus>()?),
        planned_time: Some(parse_time(&raw.planned_time)?),
        actual_time: raw.actual_time.as_deref().map(parse_time).transpose()?,
        dt: Some(context.instant(raw.actual_relative_time)?),
        seq_num: None,
        stop: Some(stop.clone()),
        trip: Some(trip),
        route: Some(route),
        vehicle,
    })
}

/// Extract the passages of one trip along its stops
///
/// The trip carries the route name and direction reported at the top of
/// the response; its id is not part of the payload.
pub fn extract_trip_passages(body: &str) -> Result<TripPassages, ParseError> {
    let raw: RawTripPassages = from_json(body)?;
    let route = raw.route_name.map(Route::named);
    let trip = Trip {
        id: None,
        route: route.clone(),
        direction: raw.direction_text,
    };

    let mut passages = Vec::with_capacity(raw.old.len() + raw.actual.len());
    for (segment, old) in [(raw.old, true), (raw.actual, false)] {
        for passage in segment {
            passages.push(convert_trip_passage(passage, old, &trip, route.as_ref())?);
        }
    }

    Ok(TripPassages { trip, passages })
}

fn convert_trip_passage(
    raw: RawTripPassage,
    old: bool,
    trip: &Trip,
    route: Option<&Route>,
) -> Result<Passage, ParseError> {
    Ok(Passage {
        id: None,
        old: Some(old),
        status: Some(raw.status.parse::<PassageStatus>()?),
        planned_time: raw.planned_time.as_deref().map(parse_time).transpose()?,
        actual_time: raw.actual_time.as_deref().map(parse_time).transpose()?,
        dt: None,
        seq_num: Some(raw.stop_seq_num.into_number()?),
        stop: Some(Stop {
            id: Some(raw.stop.id),
            name: Some(raw.stop.name),
            number: Some(raw.stop.short_name),
            ..Stop::default()
        }),
        trip: Some(trip.clone()),
        route: route.cloned(),
        vehicle: None,
    })
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStopPassages {
    stop_name: String,
    routes: Vec<RawRoute>,
    old: Vec<RawStopPassage>,
    actual: Vec<RawStopPassage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStopPassage {
    #[serde(rename = "passageid")]
    passage_id: String,
    pattern_text: String,
    route_id: String,
    trip_id: String,
    direction: String,
    planned_time: String,
    actual_relative_time: i64,
    status: String,
    actual_time: Option<String>,
    vehicle_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTripPassages {
    route_name: Option<String>,
    direction_text: Option<String>,
    old: Vec<RawTripPassage>,
    actual: Vec<RawTripPassage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTripPassage {
    stop: RawTripStop,
    #[serde(rename = "stop_seq_num")]
    stop_seq_num: RawSequenceNumber,
    status: String,
    planned_time: Option<String>,
    actual_time: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTripStop {
    id: String,
    name: String,
    short_name: String,
}

/// The service sends sequence numbers both as integers and as strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSequenceNumber {
    Number(u32),
    Text(String),
}

impl RawSequenceNumber {
    fn into_number(self) -> Result<u32, ParseError> {
        match self {
            Self::Number(number) => Ok(number),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidSequenceNumber(text)),
        }
    }
}
