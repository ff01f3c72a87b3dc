//! The known marker glyph catalog. Keys match the asset names the rendering
//! surface ships; a waypoint whose icon key is absent here still renders,
//! the surface just decides how to display the missing glyph.

use fxhash::FxHashSet;
use once_cell::sync::Lazy;

/// Every marker key with a shipped glyph asset
pub const MARKER_CATALOG: &[&str] = &[
    "pin",
    "trailhead",
    "campsite",
    "cairn",
    "cave",
    "volcano",
    "park",
    "forest",
    "geyser",
    "peak",
    "reef",
    "scrub",
    "attraction",
    "binoculars",
    "picnic",
    "garden",
    "snowflake",
    "mud",
    "grass",
    "wetland",
    "marsh",
    "water",
    "lake",
    "waterfall",
    "natural-spring",
    "hotspring",
    "stone",
    "cliff",
    "sand-dune",
    "wood",
    "tree-fall",
    "logging",
    "oil-well",
    "mine",
    "petroglyph",
    "beach",
    "fuel",
    "restaurant",
    "parking",
    "potable-water",
    "shower",
    "toilets",
    "harbor",
    "cafe",
    "market",
    "ranger-station",
    "city",
    "fire-lookout",
    "building",
    "museum",
    "ruins",
    "lighthouse",
    "golf",
    "cemetery",
    "hospital",
    "helipad",
    "emergency-telephone",
    "chemist",
    "resupply",
    "danger",
    "police",
    "suitcase",
    "minefield",
    "trash",
    "fast-food",
    "camera",
    "electric",
    "fish",
    "disc-golf",
    "swimming",
    "skiing",
    "pitch",
    "playground",
    "known-route",
    "canoe",
    "climbing",
    "snowmobile",
    "disability",
    "shelter",
    "lodging",
    "bicycle",
    "airport",
    "car",
    "bus",
    "rail",
    "heliport",
    "van",
    "off-road",
    "rv-park",
    "mobilephone",
    "fire-station",
    "dam",
    "steps",
    "saddle",
    "prison",
    "railroad",
    "fence",
    "gate",
    "bridge",
    "tree-stand",
    "ground-blind",
    "trail-camera",
    "track-dog",
    "track-deer",
    "scat",
    "turkey",
    "horse",
    "dog-park",
    "bear",
    "moose",
    "elk",
    "deer",
    "bird",
    "mushroom",
    "ghost-town",
    "information",
    "no-admittance-1",
    "no-admittance-2",
    "polling-place",
    "circle",
    "heart",
    "square",
    "triangle",
    "star",
    "body-of-water",
    "number-0",
    "number-1",
    "number-2",
    "number-3",
    "number-4",
    "number-5",
    "number-6",
    "number-7",
    "number-8",
    "number-9",
];

static CATALOG_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| MARKER_CATALOG.iter().copied().collect());

/// Whether `key` names a glyph in the shipped catalog
pub fn is_known(key: &str) -> bool {
    CATALOG_SET.contains(key)
}
