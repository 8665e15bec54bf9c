//! Passage entity

use chrono::{DateTime, FixedOffset, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{route::Route, stop::Stop, trip::Trip, vehicle::Vehicle};
use crate::value_objects::PassageStatus;

/// A single scheduled or realized visit of a trip at a stop
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `true` for passages that already happened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PassageStatus>,
    /// Timetable time of day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_time: Option<NaiveTime>,
    /// Live time of day, unset while not yet known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_time: Option<NaiveTime>,
    /// Absolute instant: the response's "now" plus the relative offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dt: Option<DateTime<FixedOffset>>,
    /// Position of the stop along the trip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq_num: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Stop>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip: Option<Trip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Route>,
    /// Unset when no vehicle is assigned yet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<Vehicle>,
}

impl Passage {
    /// Best known time of day: live if available, timetable otherwise
    #[must_use]
    pub fn effective_time(&self) -> Option<NaiveTime> {
        self.actual_time.or(self.planned_time)
    }

    /// Delay of the live time against the timetable, in whole minutes
    ///
    /// Unset unless both times are known. Crossing midnight is not detected.
    #[must_use]
    pub fn delay_minutes(&self) -> Option<i64> {
        let planned = self.planned_time?;
        let actual = self.actual_time?;
        Some((actual - planned).num_minutes())
    }
}
