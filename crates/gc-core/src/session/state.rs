use serde::{Deserialize, Serialize};

use crate::geo::{DistanceVerdict, PositionSample};

use super::{CaptureArtifact, SessionError, SessionEvent};

/// Check-in session state machine
///
/// Design principle: this is a pure type state machine with only state
/// definitions and transition validation logic. Runtime behaviors like
/// the asynchronous position request and camera stream lifecycle are
/// handled by the application layer (gc-app).
///
/// State transitions:
/// ```text
///   Acquiring
///    │
///    ├── FixAcquired{within_range=true}  ──► InRange
///    │                                        │
///    │                                        ├── CaptureSubmitted ──► Captured
///    │                                        │                         │
///    │                                        │◄── CaptureDiscarded ────┘
///    │
///    ├── FixAcquired{within_range=false} ──► OutOfRange
///    │                                        (no exit; fresh session only)
///    │
///    └── FixFailed ───────────────────────► Failed
///                                             (no exit; fresh session only)
/// ```
///
/// A verdict is never exposed without the sample it was computed from,
/// and an artifact is only ever held alongside an in-range verdict;
/// the variants make the illegal combinations unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the single-shot position fix.
    Acquiring,

    /// Fix acquired, outside the geofence. A stale verdict must not
    /// silently become valid, so the only way out is a fresh session
    /// with a fresh position request.
    OutOfRange {
        sample: PositionSample,
        verdict: DistanceVerdict,
    },

    /// Fix acquired inside the geofence; capture may proceed.
    InRange {
        sample: PositionSample,
        verdict: DistanceVerdict,
    },

    /// Selfie accepted; the check-in may be finalized.
    Captured {
        sample: PositionSample,
        verdict: DistanceVerdict,
        artifact: CaptureArtifact,
    },

    /// The position provider reported an error or is unavailable.
    Failed { message: String },
}

impl SessionState {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Acquiring => "acquiring",
            Self::OutOfRange { .. } => "out-of-range",
            Self::InRange { .. } => "in-range",
            Self::Captured { .. } => "captured",
            Self::Failed { .. } => "failed",
        }
    }

    /// Whether no further transition is possible without a fresh session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::Failed { .. })
    }

    /// The sole authority for enabling the check-in action: true iff
    /// a capture has been accepted.
    pub fn ready_to_check_in(&self) -> bool {
        matches!(self, Self::Captured { .. })
    }

    /// The verdict computed from the current fix, if one exists.
    pub fn verdict(&self) -> Option<&DistanceVerdict> {
        match self {
            Self::OutOfRange { verdict, .. }
            | Self::InRange { verdict, .. }
            | Self::Captured { verdict, .. } => Some(verdict),
            _ => None,
        }
    }

    /// Apply an event, producing the next state.
    ///
    /// Rejected events leave the current state untouched (the method
    /// borrows rather than consumes) and surface the reason as a
    /// [`SessionError`].
    pub fn apply(&self, event: SessionEvent) -> Result<SessionState, SessionError> {
        match (self, event) {
            (Self::Acquiring, SessionEvent::FixAcquired { sample, verdict }) => {
                if verdict.within_range {
                    Ok(Self::InRange { sample, verdict })
                } else {
                    Ok(Self::OutOfRange { sample, verdict })
                }
            }
            (Self::Acquiring, SessionEvent::FixFailed { message }) => {
                Ok(Self::Failed { message })
            }
            (Self::InRange { sample, verdict }, SessionEvent::CaptureSubmitted { artifact }) => {
                Ok(Self::Captured {
                    sample: *sample,
                    verdict: *verdict,
                    artifact,
                })
            }
            (Self::Captured { sample, verdict, .. }, SessionEvent::CaptureDiscarded) => {
                // Back to the previously computed verdict, no re-query.
                Ok(Self::InRange {
                    sample: *sample,
                    verdict: *verdict,
                })
            }
            (state, SessionEvent::CaptureSubmitted { .. })
            | (state, SessionEvent::CaptureDiscarded) => Err(SessionError::Precondition {
                state: state.name(),
            }),
            // A second fix completion can only mean a programming error
            // in the driving layer; the single-shot guard lives there.
            (state, SessionEvent::FixAcquired { .. }) | (state, SessionEvent::FixFailed { .. }) => {
                Err(SessionError::Precondition {
                    state: state.name(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{Coordinate, ReferencePoint};
    use bytes::Bytes;
    use chrono::Utc;

    fn office() -> ReferencePoint {
        ReferencePoint::new(
            Coordinate::new(-8.699533461763505, 115.17766812036525).unwrap(),
            100.0,
        )
        .unwrap()
    }

    fn in_range_fix() -> (PositionSample, DistanceVerdict) {
        let sample = PositionSample::new(*office().coordinate(), Utc::now(), Some(8.0));
        let verdict = DistanceVerdict::evaluate(&sample, &office());
        (sample, verdict)
    }

    fn out_of_range_fix() -> (PositionSample, DistanceVerdict) {
        let sample = PositionSample::new(
            Coordinate::new(-8.700433, 115.178668).unwrap(),
            Utc::now(),
            Some(8.0),
        );
        let verdict = DistanceVerdict::evaluate(&sample, &office());
        (sample, verdict)
    }

    fn artifact() -> CaptureArtifact {
        CaptureArtifact::new(Bytes::from_static(b"selfie"), "image/png")
    }

    fn cases() -> Vec<(
        &'static str,
        SessionState,
        SessionEvent,
        Result<SessionState, SessionError>,
    )> {
        let (in_sample, in_verdict) = in_range_fix();
        let (out_sample, out_verdict) = out_of_range_fix();

        vec![
            (
                "acquiring -> in range",
                SessionState::Acquiring,
                SessionEvent::FixAcquired {
                    sample: in_sample,
                    verdict: in_verdict,
                },
                Ok(SessionState::InRange {
                    sample: in_sample,
                    verdict: in_verdict,
                }),
            ),
            (
                "acquiring -> out of range",
                SessionState::Acquiring,
                SessionEvent::FixAcquired {
                    sample: out_sample,
                    verdict: out_verdict,
                },
                Ok(SessionState::OutOfRange {
                    sample: out_sample,
                    verdict: out_verdict,
                }),
            ),
            (
                "acquiring -> failed",
                SessionState::Acquiring,
                SessionEvent::FixFailed {
                    message: "location services disabled".into(),
                },
                Ok(SessionState::Failed {
                    message: "location services disabled".into(),
                }),
            ),
            (
                "in range -> captured",
                SessionState::InRange {
                    sample: in_sample,
                    verdict: in_verdict,
                },
                SessionEvent::CaptureSubmitted {
                    artifact: artifact(),
                },
                Ok(SessionState::Captured {
                    sample: in_sample,
                    verdict: in_verdict,
                    artifact: artifact(),
                }),
            ),
            (
                "captured -> in range on discard",
                SessionState::Captured {
                    sample: in_sample,
                    verdict: in_verdict,
                    artifact: artifact(),
                },
                SessionEvent::CaptureDiscarded,
                Ok(SessionState::InRange {
                    sample: in_sample,
                    verdict: in_verdict,
                }),
            ),
            (
                "submit while acquiring is rejected",
                SessionState::Acquiring,
                SessionEvent::CaptureSubmitted {
                    artifact: artifact(),
                },
                Err(SessionError::Precondition { state: "acquiring" }),
            ),
            (
                "submit while out of range is rejected",
                SessionState::OutOfRange {
                    sample: out_sample,
                    verdict: out_verdict,
                },
                SessionEvent::CaptureSubmitted {
                    artifact: artifact(),
                },
                Err(SessionError::Precondition {
                    state: "out-of-range",
                }),
            ),
            (
                "discard while in range is rejected",
                SessionState::InRange {
                    sample: in_sample,
                    verdict: in_verdict,
                },
                SessionEvent::CaptureDiscarded,
                Err(SessionError::Precondition { state: "in-range" }),
            ),
            (
                "late fix completion in terminal state is rejected",
                SessionState::Failed {
                    message: "denied".into(),
                },
                SessionEvent::FixAcquired {
                    sample: in_sample,
                    verdict: in_verdict,
                },
                Err(SessionError::Precondition { state: "failed" }),
            ),
        ]
    }

    #[test]
    fn transition_table() {
        for (name, state, event, expected) in cases() {
            let got = state.apply(event);
            assert_eq!(got, expected, "case: {name}");
        }
    }

    #[test]
    fn ready_to_check_in_only_when_captured() {
        let (sample, verdict) = in_range_fix();
        let states = [
            SessionState::Acquiring,
            SessionState::OutOfRange { sample, verdict },
            SessionState::InRange { sample, verdict },
            SessionState::Failed {
                message: "denied".into(),
            },
        ];
        for state in &states {
            assert!(!state.ready_to_check_in(), "state: {}", state.name());
        }
        let captured = SessionState::Captured {
            sample,
            verdict,
            artifact: artifact(),
        };
        assert!(captured.ready_to_check_in());
    }

    #[test]
    fn rejected_event_leaves_state_observable() {
        // apply() borrows, so the caller's state survives a rejection.
        let state = SessionState::Acquiring;
        let err = state
            .apply(SessionEvent::CaptureSubmitted {
                artifact: artifact(),
            })
            .unwrap_err();
        assert_eq!(err, SessionError::Precondition { state: "acquiring" });
        assert_eq!(state, SessionState::Acquiring);
    }

    #[test]
    fn terminal_states() {
        let (sample, verdict) = out_of_range_fix();
        assert!(SessionState::OutOfRange { sample, verdict }.is_terminal());
        assert!(SessionState::Failed {
            message: "denied".into()
        }
        .is_terminal());
        assert!(!SessionState::Acquiring.is_terminal());
    }
}
