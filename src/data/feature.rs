use crate::core::geo::LatLng;
use crate::store::Waypoint;
use serde::{Deserialize, Serialize};

/// Geometry of a renderer-facing feature, in GeoJSON shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
}

impl Geometry {
    /// Builds a point geometry. GeoJSON coordinate order is [lng, lat].
    pub fn point(position: LatLng) -> Self {
        Geometry::Point {
            coordinates: [position.lng, position.lat],
        }
    }

    pub fn position(&self) -> LatLng {
        match self {
            Geometry::Point { coordinates } => LatLng::new(coordinates[1], coordinates[0]),
        }
    }
}

/// Attributes handed to the rendering layer. Values are strings even where
/// the underlying record is numeric, matching renderer attribute typing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub id: String,
    pub icon: String,
}

/// A single renderable record handed to the map rendering layer. Created
/// fresh on every query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: FeatureProperties,
}

impl Feature {
    pub fn from_waypoint(waypoint: &Waypoint) -> Self {
        Self {
            geometry: Geometry::point(waypoint.position),
            properties: FeatureProperties {
                id: waypoint.id.to_string(),
                icon: waypoint.icon.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_from_waypoint() {
        let waypoint = Waypoint::new(1, LatLng::new(47.42, -121.425), "pin");
        let feature = Feature::from_waypoint(&waypoint);

        assert_eq!(feature.properties.id, "1");
        assert_eq!(feature.properties.icon, "pin");
        assert_eq!(feature.geometry.position(), waypoint.position);
    }

    #[test]
    fn test_feature_wire_shape() {
        let waypoint = Waypoint::new(7, LatLng::new(47.5, -121.5), "campsite");
        let value = serde_json::to_value(Feature::from_waypoint(&waypoint)).unwrap();

        assert_eq!(value["geometry"]["type"], "Point");
        assert_eq!(value["geometry"]["coordinates"][0], -121.5);
        assert_eq!(value["geometry"]["coordinates"][1], 47.5);
        assert_eq!(value["properties"]["id"], "7");
        assert_eq!(value["properties"]["icon"], "campsite");
    }

    #[test]
    fn test_feature_round_trips_through_json() {
        let feature = Feature::from_waypoint(&Waypoint::new(3, LatLng::new(10.0, 20.0), "peak"));
        let json = serde_json::to_string(&feature).unwrap();
        let parsed: Feature = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, feature);
    }
}
