//! Geographic value types and geofence math.
//!
//! Everything in this module is a pure value or a pure function; the
//! position *provider* lives behind a port (see [`crate::ports::position`]).

mod coordinate;
mod distance;
mod position_sample;
mod reference_point;
mod verdict;

pub use coordinate::{Coordinate, GeoError};
pub use distance::{distance_meters, is_within_radius, EARTH_RADIUS_METERS};
pub use position_sample::PositionSample;
pub use reference_point::ReferencePoint;
pub use verdict::DistanceVerdict;
