//! Great-circle distance and the radius test that gates check-ins.
//!
//! Haversine on a spherical Earth. The formula degrades near antipodal
//! points, which is acceptable here: check-ins only care about
//! sub-kilometer ranges.

use super::Coordinate;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates in meters.
///
/// Symmetric up to floating-point tolerance, and zero for identical
/// inputs. Assumes validated coordinates (see [`Coordinate::new`]).
pub fn distance_meters(a: &Coordinate, b: &Coordinate) -> f64 {
    let phi_a = a.latitude().to_radians();
    let phi_b = b.latitude().to_radians();
    let delta_phi = (b.latitude() - a.latitude()).to_radians();
    let delta_lambda = (b.longitude() - a.longitude()).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_a.cos() * phi_b.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Whether a distance falls inside the geofence radius.
///
/// The boundary is inclusive: a sample exactly at the radius counts as
/// in range.
pub fn is_within_radius(distance_meters: f64, radius_meters: f64) -> bool {
    distance_meters <= radius_meters
}
