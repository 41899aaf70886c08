use serde::{Deserialize, Serialize};

use super::{distance_meters, is_within_radius, PositionSample, ReferencePoint};

/// The in/out decision for one position sample against the reference
/// point.
///
/// Derived deterministically from its inputs and recomputed whenever the
/// position changes; never stored independently of the sample it was
/// computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceVerdict {
    pub distance_meters: f64,
    pub within_range: bool,
}

impl DistanceVerdict {
    /// Evaluate a sample against the reference point.
    pub fn evaluate(sample: &PositionSample, reference: &ReferencePoint) -> Self {
        let distance = distance_meters(&sample.coordinate, reference.coordinate());
        let within_range = is_within_radius(distance, reference.radius_meters());
        #[cfg(feature = "tracing")]
        tracing::debug!(distance_meters = distance, within_range, "geofence evaluated");
        Self {
            distance_meters: distance,
            within_range,
        }
    }
}
