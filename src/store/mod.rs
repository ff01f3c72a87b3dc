//! In-memory waypoint collection, built once at startup and read-only
//! afterwards. Bounding-box lookups go through an R-tree so a tile query
//! touches only the candidates near the tile instead of the whole store.

use crate::core::{bounds::LatLngBounds, geo::LatLng};
use rstar::{RTree, RTreeObject, AABB};
use serde::{Deserialize, Serialize};

/// A point-of-interest record. Immutable once the store is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: u64,
    pub position: LatLng,
    pub icon: String,
}

impl Waypoint {
    pub fn new(id: u64, position: LatLng, icon: impl Into<String>) -> Self {
        Self {
            id,
            position,
            icon: icon.into(),
        }
    }
}

/// R-tree entry: a slot into the waypoint vector plus its [lng, lat] point
#[derive(Debug, Clone)]
struct IndexedPoint {
    slot: usize,
    position: [f64; 2],
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

/// Owns the waypoint records and their spatial index.
///
/// The store has no insert or remove API; queries may therefore run
/// concurrently from any number of threads without locking.
pub struct WaypointStore {
    waypoints: Vec<Waypoint>,
    rtree: RTree<IndexedPoint>,
}

impl WaypointStore {
    /// Builds a store, indexing every waypoint once up front.
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        let entries = waypoints
            .iter()
            .enumerate()
            .map(|(slot, waypoint)| IndexedPoint {
                slot,
                position: [waypoint.position.lng, waypoint.position.lat],
            })
            .collect();

        Self {
            waypoints,
            rtree: RTree::bulk_load(entries),
        }
    }

    /// Read-only view of every waypoint, in construction order
    pub fn all(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Waypoints whose position lies within `bounds`, edges inclusive.
    ///
    /// The R-tree narrows the candidate set; the bounds test decides, so
    /// the result is exactly the waypoints `bounds.contains` accepts. The
    /// output order is stable for a fixed store but is not insertion order.
    pub fn locate_in(&self, bounds: &LatLngBounds) -> Vec<&Waypoint> {
        let envelope = AABB::from_corners(
            [bounds.south_west.lng, bounds.south_west.lat],
            [bounds.north_east.lng, bounds.north_east.lat],
        );

        self.rtree
            .locate_in_envelope(&envelope)
            .map(|entry| &self.waypoints[entry.slot])
            .filter(|waypoint| bounds.contains(&waypoint.position))
            .collect()
    }

    /// Fixture store: a `dimension` x `dimension` grid of waypoints starting
    /// at `origin`, `spacing` degrees apart, ids assigned row-major.
    pub fn grid(origin: LatLng, spacing: f64, dimension: u32, icon: &str) -> Self {
        let mut waypoints = Vec::with_capacity((dimension * dimension) as usize);
        for row in 0..dimension {
            for col in 0..dimension {
                let position = LatLng::new(
                    origin.lat + row as f64 * spacing,
                    origin.lng + col as f64 * spacing,
                );
                waypoints.push(Waypoint::new((row * dimension + col) as u64, position, icon));
            }
        }

        log::debug!("generated {} grid waypoints", waypoints.len());
        Self::new(waypoints)
    }

    /// Fixture store: `count` waypoints jittered within `spread` degrees of
    /// `center` on both axes. The jitter is seeded, so a given seed always
    /// produces the same scatter.
    pub fn scatter(center: LatLng, spread: f64, count: u32, icon: &str, seed: u64) -> Self {
        let mut state = seed;
        // splitmix64, mapped onto [0, 1)
        let mut next_unit = move || {
            state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^= z >> 31;
            (z >> 11) as f64 / (1u64 << 53) as f64
        };

        let mut waypoints = Vec::with_capacity(count as usize);
        for id in 0..count {
            let lat = center.lat + (next_unit() * 2.0 - 1.0) * spread;
            let lng = center.lng + (next_unit() * 2.0 - 1.0) * spread;
            waypoints.push(Waypoint::new(id as u64, LatLng::new(lat, lng), icon));
        }

        log::debug!("generated {} scattered waypoints", waypoints.len());
        Self::new(waypoints)
    }
}
