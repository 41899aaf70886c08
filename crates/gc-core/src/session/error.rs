use thiserror::Error;

/// Errors surfaced by the check-in session.
///
/// None of these are retried by the core; retry is a caller policy.
/// Position failure is not represented here: it surfaces as the
/// terminal [`SessionState::Failed`](super::SessionState) variant,
/// carrying the provider's message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Camera permission denied or device busy. Does not invalidate a
    /// successful position fix.
    #[error("capture device error: {0}")]
    CaptureDevice(String),

    /// An operation was invoked in a state that does not allow it
    /// (e.g. submitting a capture while out of range). The state is
    /// left untouched.
    #[error("operation not allowed while {state}")]
    Precondition { state: &'static str },

    /// `finalize_check_in` was called before a capture was accepted.
    #[error("check-in not ready: session is {state}, expected captured")]
    NotReady { state: &'static str },
}
