//! Response aggregates
//!
//! Endpoints that return more than one kind of record hand them back
//! grouped in these types.

use domain::{Passage, Route, Stop, Trip};
use serde::{Deserialize, Serialize};

/// Passages at a stop or stop point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopPassages {
    /// The stop, known by name only
    pub stop: Stop,
    /// Routes serving the stop
    pub routes: Vec<Route>,
    /// Old passages first, then upcoming ones, each in service order
    pub passages: Vec<Passage>,
}

impl StopPassages {
    /// Passages that have not happened yet
    pub fn upcoming(&self) -> impl Iterator<Item = &Passage> {
        self.passages.iter().filter(|p| p.old != Some(true))
    }
}

/// Passages of one trip along its stops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPassages {
    /// The trip, with a name-only route and direction when reported
    pub trip: Trip,
    /// Old passages first, then upcoming ones, each in stop order
    pub passages: Vec<Passage>,
}

/// A route together with its stops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStops {
    pub route: Route,
    pub stops: Vec<Stop>,
}
