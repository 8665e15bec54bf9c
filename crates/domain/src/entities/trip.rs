//! Trip entity

use serde::{Deserialize, Serialize};

use super::route::Route;

/// One scheduled run of a vehicle along a route in one direction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owned copy of the route, often partial (name only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Route>,
    /// Terminus name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}
