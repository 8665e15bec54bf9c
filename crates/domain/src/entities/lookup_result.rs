//! Full-text lookup result

use serde::{Deserialize, Serialize};

use super::stop::Stop;
use super::stop_point::StopPoint;

/// A single hit of a full-text lookup: either a stop or a stop point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LookupResult {
    Stop(Stop),
    StopPoint(StopPoint),
}

impl LookupResult {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Stop(stop) => stop.name.as_deref(),
            Self::StopPoint(stop_point) => stop_point.name.as_deref(),
        }
    }

    #[must_use]
    pub const fn as_stop(&self) -> Option<&Stop> {
        match self {
            Self::Stop(stop) => Some(stop),
            Self::StopPoint(_) => None,
        }
    }

    #[must_use]
    pub const fn as_stop_point(&self) -> Option<&StopPoint> {
        match self {
            Self::StopPoint(stop_point) => Some(stop_point),
            Self::Stop(_) => None,
        }
    }
}
