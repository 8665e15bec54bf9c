//! Route extractors

use domain::Route;
use serde::Deserialize;

use super::{from_json, stops::RawNumberedStop};
use crate::{error::ParseError, models::RouteStops};

/// Extract every route the service knows
pub fn extract_routes(body: &str) -> Result<Vec<Route>, ParseError> {
    let raw: RawRoutes = from_json(body)?;
    Ok(raw.routes.into_iter().map(RawRoute::into_route).collect())
}

/// Extract one route together with its stops, in route order
pub fn extract_route_stops(body: &str) -> Result<RouteStops, ParseError> {
    let raw: RawRouteStops = from_json(body)?;
    Ok(RouteStops {
        route: raw.route.into_route(),
        stops: raw.stops.into_iter().map(RawNumberedStop::into_stop).collect(),
    })
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawRoutes {
    routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawRouteStops {
    route: RawRoute,
    stops: Vec<RawNumberedStop>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawRoute {
    id: String,
    name: String,
    #[serde(alias = "type")]
    route_type: Option<String>,
    authority: String,
    #[serde(default)]
    directions: Vec<String>,
    alerts: Vec<String>,
}

impl RawRoute {
    pub(super) fn into_route(self) -> Route {
        Route {
            id: Some(self.id),
            name: Some(self.name),
            route_type: self.route_type,
            authority: Some(self.authority),
            directions: Some(self.directions),
            alerts: Some(self.alerts),
        }
    }
}
