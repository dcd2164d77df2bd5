// Per-dataset record transformers. Each one is a total function from a raw
// record to a CoolSpot; missing source fields get documented defaults, never
// an error.
pub mod activity;
pub mod fountain;
pub mod green_space;

pub use activity::transform_activity;
pub use fountain::transform_fountain;
pub use green_space::transform_green_space;

use crate::model::Coordinates;

/// Fallback point for records with missing or zeroed coordinates: the
/// geographic center of Paris.
pub(crate) const PARIS_CENTER: Coordinates = Coordinates {
    lat: 48.8566,
    lng: 2.3522,
};
