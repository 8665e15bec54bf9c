//! Route and vehicle geometry extractors

use domain::{Path, degrees_from_scaled};
use serde::Deserialize;

use super::from_json;
use crate::error::ParseError;

/// Extract path segments with waypoints converted to degrees
pub fn extract_paths(body: &str) -> Result<Vec<Path>, ParseError> {
    let raw: RawPaths = from_json(body)?;
    Ok(raw
        .paths
        .into_iter()
        .map(|path| Path {
            color: path.color,
            waypoints: path
                .way_points
                .into_iter()
                .map(|point| (degrees_from_scaled(point.lat), degrees_from_scaled(point.lon)))
                .collect(),
        })
        .collect())
}

/// Extract the geometry of a route
pub fn extract_route_paths(body: &str) -> Result<Vec<Path>, ParseError> {
    extract_paths(body)
}

/// Extract the track of a vehicle
pub fn extract_vehicle_paths(body: &str) -> Result<Vec<Path>, ParseError> {
    extract_paths(body)
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawPaths {
    paths: Vec<RawPath>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPath {
    color: String,
    way_points: Vec<RawWayPoint>,
}

#[derive(Debug, Deserialize)]
struct RawWayPoint {
    lat: f64,
    lon: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTE_PATHS: &str = r##"{"paths": [
        {
            "color": "#f89f05",
            "wayPoints": [
                {"lat": 180232794, "lon": 71802022, "seq": "1"},
                {"lat": 180244921, "lon": 71803299, "seq": "2"},
                {"lat": 180252000, "lon": 71806500, "seq": "3"}
            ]
        },
        {
            "color": "#0070bb",
            "wayPoints": []
        }
    ]}"##;

    #[test]
    fn test_extract_paths() {
        let paths = extract_paths(ROUTE_PATHS).unwrap();
        assert_eq!(paths.len(), 2);

        assert_eq!(paths[0].color, "#f89f05");
        assert_eq!(paths[0].waypoints.len(), 3);

        let (lat, lon) = paths[0].waypoints[0];
        assert!((lat - 50.064_665).abs() < 1e-9);
        assert!((lon - 19.945_006_111_111_113).abs() < 1e-9);

        let (lat, lon) = paths[0].waypoints[2];
        assert!((lat - 180_252_000.0 / 3_600_000.0).abs() < 1e-9);
        assert!((lon - 71_806_500.0 / 3_600_000.0).abs() < 1e-9);

        assert_eq!(paths[1].color, "#0070bb");
        assert!(paths[1].waypoints.is_empty());
    }

    #[test]
    fn test_route_and_vehicle_paths_share_format() {
        assert_eq!(
            extract_route_paths(ROUTE_PATHS).unwrap(),
            extract_vehicle_paths(ROUTE_PATHS).unwrap()
        );
    }

    #[test]
    fn test_extract_paths_empty() {
        assert!(extract_paths(r#"{"paths": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_extract_paths_missing_color() {
        let body = r#"{"paths": [{"wayPoints": [{"lat": 1, "lon": 2}]}]}"#;
        assert!(matches!(extract_paths(body), Err(ParseError::Json(_))));
    }
}
