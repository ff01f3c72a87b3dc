use crate::core::bounds::LatLngBounds;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Latitude limit of the Web Mercator projection
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// Deepest zoom level the tile pyramid addresses
pub const MAX_ZOOM: u8 = 30;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Clamps latitude to the Web Mercator range. The forward projection is
    /// singular at the poles, so latitudes must pass through here first.
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a tile coordinate in the slippy map tile system.
///
/// x and y are only meaningful within [0, 2^z); callers constructing tiles
/// from raw renderer input should check `is_valid` before querying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Creates the tile coordinate containing a LatLng at the given zoom.
    ///
    /// Latitude is clamped to the Web Mercator range before projection, and
    /// the result is clamped into [0, 2^z) so inputs sitting exactly on the
    /// +180 meridian or the latitude limit land in the last column/row
    /// instead of one past it.
    pub fn from_lat_lng(lat_lng: &LatLng, zoom: u8) -> Self {
        let zoom = zoom.min(MAX_ZOOM);
        let lat_rad = LatLng::clamp_lat(lat_lng.lat).to_radians();
        let n = 2_f64.powi(zoom as i32);

        let x = ((lat_lng.lng + 180.0) / 360.0 * n).floor();
        let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n).floor();

        Self::new(
            x.clamp(0.0, n - 1.0) as u32,
            y.clamp(0.0, n - 1.0) as u32,
            zoom,
        )
    }

    /// Gets the geographic footprint of the tile.
    ///
    /// Longitude edges are linear in x; latitude edges come from the inverse
    /// Web Mercator transform of the normalized y range. y grows downward,
    /// so y maps to the north edge and y+1 to the south edge.
    pub fn bounds(&self) -> LatLngBounds {
        let n = 2_f64.powi(self.z as i32);
        let width = 360.0 / n;

        let west = -180.0 + self.x as f64 * width;
        let east = west + width;

        let north = inverse_mercator_lat(self.y as f64 / n);
        let south = inverse_mercator_lat((self.y as f64 + 1.0) / n);

        LatLngBounds::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Gets the parent tile at a lower zoom level
    pub fn parent(&self) -> Option<TileCoord> {
        if self.z == 0 {
            None
        } else {
            Some(TileCoord::new(self.x / 2, self.y / 2, self.z - 1))
        }
    }

    /// Gets the child tiles at a higher zoom level
    pub fn children(&self) -> Vec<TileCoord> {
        if self.z >= MAX_ZOOM {
            Vec::new()
        } else {
            vec![
                TileCoord::new(self.x * 2, self.y * 2, self.z + 1),
                TileCoord::new(self.x * 2 + 1, self.y * 2, self.z + 1),
                TileCoord::new(self.x * 2, self.y * 2 + 1, self.z + 1),
                TileCoord::new(self.x * 2 + 1, self.y * 2 + 1, self.z + 1),
            ]
        }
    }

    /// Checks if the tile is valid for its zoom level
    pub fn is_valid(&self) -> bool {
        self.z <= MAX_ZOOM
            && (self.x as u64) < (1u64 << self.z)
            && (self.y as u64) < (1u64 << self.z)
    }
}

/// Latitude of a normalized Mercator y value in [0, 1], 0 at the north edge
fn inverse_mercator_lat(m: f64) -> f64 {
    (180.0 / PI) * (2.0 * (PI * (1.0 - 2.0 * m)).exp().atan() - PI / 2.0)
}
