//! Route entity

use serde::{Deserialize, Serialize};

/// A line of the network, e.g. tram `"24"`
///
/// Routes embedded in trips and passages are partial and usually carry just
/// an id and/or a name. Fully extracted routes always have `directions` and
/// `alerts` set, possibly to empty lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Line name as shown to riders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Vehicle type (`"tram"`, `"bus"`)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub route_type: Option<String>,
    /// Operating authority, e.g. `"MPK"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
    /// Terminus names in service order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directions: Option<Vec<String>>,
    /// Active service alerts in service order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alerts: Option<Vec<String>>,
}

impl Route {
    /// A partial route known only by its name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
