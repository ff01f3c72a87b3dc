//! # Tilepin
//!
//! A tile-aware waypoint source for slippy-map renderers.
//!
//! Given a collection of point-of-interest records and a requested map tile
//! (z/x/y) or viewport, tilepin determines which records are visible,
//! converts them into renderer-consumable GeoJSON point features, and keeps
//! track of the icon assets each record needs so that every feature's icon
//! is registered with the rendering surface before the feature is handed
//! back.

pub mod core;
pub mod data;
pub mod icons;
pub mod prelude;
pub mod query;
pub mod store;

// Re-export public API
pub use crate::core::{
    bounds::LatLngBounds,
    geo::{LatLng, TileCoord},
};

pub use crate::data::feature::{Feature, FeatureProperties, Geometry};

pub use crate::icons::{IconRegistry, IconSink, NoopSink};

pub use crate::query::{QueryOptions, TileQueryEngine};

pub use crate::store::{Waypoint, WaypointStore};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid tile {z}/{x}/{y}: x and y must lie in [0, 2^z)")]
    InvalidTile { z: u8, x: u32, y: u32 },

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Icon registration failed: {0}")]
    IconRegistration(String),
}

/// Error type alias for convenience
pub type Error = SourceError;
