use serde::{Deserialize, Serialize};

use super::{Coordinate, GeoError};

/// The fixed location check-ins are measured against, plus the allowed
/// radius around it.
///
/// Configured once at session start and immutable for the session's
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    coordinate: Coordinate,
    radius_meters: f64,
}

impl ReferencePoint {
    /// Create a reference point. The radius must be strictly positive.
    pub fn new(coordinate: Coordinate, radius_meters: f64) -> Result<Self, GeoError> {
        if !radius_meters.is_finite() || radius_meters <= 0.0 {
            return Err(GeoError::NonPositiveRadius(radius_meters));
        }
        Ok(Self {
            coordinate,
            radius_meters,
        })
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }
}
