pub mod bounds;
pub mod geo;

// Re-exports for convenience
pub use bounds::LatLngBounds;
pub use geo::{LatLng, TileCoord};
