use crate::geo::{DistanceVerdict, PositionSample};

use super::CaptureArtifact;

/// Events that drive the check-in session.
///
/// The first two are completions of the single-shot position request;
/// the last two are caller commands.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The position provider delivered a fix and the geofence verdict
    /// was computed from it.
    FixAcquired {
        sample: PositionSample,
        verdict: DistanceVerdict,
    },

    /// The position provider reported an error or is unavailable.
    FixFailed { message: String },

    /// The caller supplies a captured selfie.
    CaptureSubmitted { artifact: CaptureArtifact },

    /// The caller discards the capture to retake it.
    CaptureDiscarded,
}
