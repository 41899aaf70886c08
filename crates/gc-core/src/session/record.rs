use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geo::{DistanceVerdict, PositionSample, ReferencePoint};

use super::CaptureArtifact;

/// The finalized bundle of verified location and selfie, ready for an
/// out-of-scope transmission layer.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInRecord {
    pub id: Uuid,
    pub reference: ReferencePoint,
    pub sample: PositionSample,
    pub verdict: DistanceVerdict,
    pub artifact: CaptureArtifact,
    pub created_at: DateTime<Utc>,
}

impl CheckInRecord {
    pub fn new(
        reference: ReferencePoint,
        sample: PositionSample,
        verdict: DistanceVerdict,
        artifact: CaptureArtifact,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            reference,
            sample,
            verdict,
            artifact,
            created_at: Utc::now(),
        }
    }
}
