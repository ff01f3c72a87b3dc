pub mod feature;

// Re-exports for convenience
pub use feature::{Feature, FeatureProperties, Geometry};
