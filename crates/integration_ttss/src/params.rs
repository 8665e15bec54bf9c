//! Request options for the passage and vehicle endpoints

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether passage listings show departures or arrivals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassageMode {
    #[default]
    Departure,
    Arrival,
}

impl PassageMode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Departure => "departure",
            Self::Arrival => "arrival",
        }
    }
}

impl fmt::Display for PassageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which vehicle positions the service should report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionType {
    /// Positions snapped onto the route geometry
    #[default]
    Corrected,
    /// Positions as received from the vehicle
    Raw,
}

impl PositionType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Corrected => "CORRECTED",
            Self::Raw => "RAW",
        }
    }
}

/// How the service colors vehicles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorType {
    #[default]
    RouteBased,
}

impl ColorType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RouteBased => "ROUTE_BASED",
        }
    }
}

/// Options for the stop and stop-point passage listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassageQuery {
    pub mode: PassageMode,
    /// Look-ahead window in minutes
    pub time_frame_minutes: u32,
    /// Only passages of this route
    pub route_id: Option<String>,
    /// Only passages towards this terminus
    pub direction: Option<String>,
}

impl Default for PassageQuery {
    fn default() -> Self {
        Self {
            mode: PassageMode::default(),
            time_frame_minutes: 120,
            route_id: None,
            direction: None,
        }
    }
}

impl PassageQuery {
    #[must_use]
    pub fn for_route(route_id: impl Into<String>) -> Self {
        Self {
            route_id: Some(route_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }
}

/// Options for the vehicle listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VehicleQuery {
    /// Only vehicles changed since this service timestamp
    pub last_update: Option<i64>,
    pub position_type: PositionType,
    pub color_type: ColorType,
}
