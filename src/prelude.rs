//! Prelude module for common tilepin types and traits
//!
//! This module re-exports the most commonly used types, traits, and
//! functions for easy importing with `use tilepin::prelude::*;`

pub use crate::core::{
    bounds::LatLngBounds,
    geo::{LatLng, TileCoord, MAX_LATITUDE, MAX_ZOOM},
};

pub use crate::data::feature::{Feature, FeatureProperties, Geometry};

pub use crate::icons::{catalog, IconRegistry, IconSink, NoopSink};

pub use crate::query::{QueryOptions, TileQueryEngine, DEFAULT_EDGE_PADDING};

pub use crate::store::{Waypoint, WaypointStore};

pub use crate::{Result, SourceError};

pub use std::sync::Arc;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
