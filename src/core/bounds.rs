use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Represents a bounding box of geographical coordinates, either a tile's
/// footprint or an arbitrary viewport.
///
/// Boxes that cross the antimeridian (west > east) are not normalized;
/// `contains` matches nothing inside such a box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Checks if the bounds contain a point, inclusive on all four edges
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Checks if the bounds intersect with another bounds
    pub fn intersects(&self, other: &LatLngBounds) -> bool {
        !(other.north_east.lat < self.south_west.lat
            || other.south_west.lat > self.north_east.lat
            || other.north_east.lng < self.south_west.lng
            || other.south_west.lng > self.north_east.lng)
    }

    /// Returns a copy expanded by `fraction` of the box's own span on each
    /// axis, clamped to the valid coordinate range. A fraction of zero is
    /// the identity.
    ///
    /// Used to pad a tile's footprint so a marker sitting just outside the
    /// strict edge is still returned for the bordering tile.
    pub fn buffer(&self, fraction: f64) -> LatLngBounds {
        let lat_span = (self.north_east.lat - self.south_west.lat).abs();
        let lng_span = (self.north_east.lng - self.south_west.lng).abs();

        LatLngBounds::from_coords(
            (self.south_west.lat - lat_span * fraction).max(-90.0),
            (self.south_west.lng - lng_span * fraction).max(-180.0),
            (self.north_east.lat + lat_span * fraction).min(90.0),
            (self.north_east.lng + lng_span * fraction).min(180.0),
        )
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Gets the span of the bounds
    pub fn span(&self) -> LatLng {
        LatLng::new(
            self.north_east.lat - self.south_west.lat,
            self.north_east.lng - self.south_west.lng,
        )
    }

    /// Returns the union of this bounds with another bounds
    pub fn union(&self, other: &LatLngBounds) -> LatLngBounds {
        let south = self.south_west.lat.min(other.south_west.lat);
        let west = self.south_west.lng.min(other.south_west.lng);
        let north = self.north_east.lat.max(other.north_east.lat);
        let east = self.north_east.lng.max(other.north_east.lng);

        LatLngBounds::from_coords(south, west, north, east)
    }

    /// Checks if the bounds are valid (south-west at or below north-east)
    pub fn is_valid(&self) -> bool {
        self.south_west.lat <= self.north_east.lat && self.south_west.lng <= self.north_east.lng
    }
}
