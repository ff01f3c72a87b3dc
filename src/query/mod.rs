//! The orchestration point: computes a tile's footprint, pads it, filters
//! the waypoint store, registers icons, and emits renderer-ready features.

use crate::{
    core::{bounds::LatLngBounds, geo::TileCoord},
    data::feature::Feature,
    icons::IconRegistry,
    store::WaypointStore,
    Result, SourceError,
};
use std::sync::Arc;
use std::time::Instant;

/// One tile-pixel's worth of padding at the tile's own resolution
pub const DEFAULT_EDGE_PADDING: f64 = 1.0 / 256.0;

/// Tuning knobs for the query engine
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOptions {
    /// Fraction of a tile's span added on each side before filtering, so a
    /// marker near a tile edge is returned for every tile that borders it.
    ///
    /// This engine owns the padding: the renderer's per-tile buffer must
    /// stay at zero, otherwise edge markers are rendered twice at seams.
    pub edge_padding: f64,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            edge_padding: DEFAULT_EDGE_PADDING,
        }
    }
}

impl QueryOptions {
    /// Options with no tile-edge padding, for hosts that configure the
    /// renderer's own tile overlap instead
    pub fn unbuffered() -> Self {
        Self { edge_padding: 0.0 }
    }
}

/// Answers tile and viewport queries against an immutable waypoint store.
///
/// Queries only read; the store is immutable and the registry synchronizes
/// itself, so one engine instance may serve concurrent tile requests
/// arriving out of order from the renderer's worker threads.
pub struct TileQueryEngine {
    store: Arc<WaypointStore>,
    icons: Arc<IconRegistry>,
    options: QueryOptions,
}

impl TileQueryEngine {
    pub fn new(store: Arc<WaypointStore>, icons: Arc<IconRegistry>) -> Self {
        Self::with_options(store, icons, QueryOptions::default())
    }

    pub fn with_options(
        store: Arc<WaypointStore>,
        icons: Arc<IconRegistry>,
        options: QueryOptions,
    ) -> Self {
        Self {
            store,
            icons,
            options,
        }
    }

    /// Features visible in `tile`, each with its icon registered before the
    /// feature is handed back.
    ///
    /// Tiles with x or y outside [0, 2^z) fail with `InvalidTile`;
    /// coordinates are never wrapped. The world tile 0/0/0 returns every
    /// waypoint, and an empty store yields an empty vector, not an error.
    pub fn query_by_tile(&self, tile: TileCoord) -> Result<Vec<Feature>> {
        if !tile.is_valid() {
            return Err(SourceError::InvalidTile {
                z: tile.z,
                x: tile.x,
                y: tile.y,
            }
            .into());
        }

        let started = Instant::now();
        let bounds = tile.bounds().buffer(self.options.edge_padding);
        let features = self.collect(&bounds);

        log::debug!(
            "got {} waypoints for tile {}/{}/{} in {:?}",
            features.len(),
            tile.z,
            tile.x,
            tile.y,
            started.elapsed()
        );
        Ok(features)
    }

    /// Features inside a caller-supplied viewport. The box is used as
    /// given; no padding is added.
    pub fn query_by_viewport(&self, viewport: &LatLngBounds) -> Vec<Feature> {
        self.collect(viewport)
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    fn collect(&self, bounds: &LatLngBounds) -> Vec<Feature> {
        self.store
            .locate_in(bounds)
            .into_iter()
            .map(|waypoint| {
                self.icons.ensure_registered(&waypoint.icon);
                Feature::from_waypoint(waypoint)
            })
            .collect()
    }
}
