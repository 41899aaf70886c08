use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A single position fix from the device location sensor.
///
/// Produced exactly once per check-in attempt; there is no continuous
/// tracking in this design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    pub coordinate: Coordinate,

    /// When the provider acquired the fix.
    pub acquired_at: DateTime<Utc>,

    /// Estimated horizontal error in meters, if the provider supplies one.
    pub accuracy_meters: Option<f64>,
}

impl PositionSample {
    pub fn new(
        coordinate: Coordinate,
        acquired_at: DateTime<Utc>,
        accuracy_meters: Option<f64>,
    ) -> Self {
        Self {
            coordinate,
            acquired_at,
            accuracy_meters,
        }
    }
}
