//! The check-in session service.
//!
//! Owns the asynchronous position request and the session state; the
//! caller/UI reads or subscribes to the state and renders per variant
//! (spinner while acquiring, warning when out of range, capture control
//! when in range, preview plus check-in action when captured).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use gc_core::geo::{DistanceVerdict, ReferencePoint};
use gc_core::ports::PositionProviderPort;
use gc_core::session::{CaptureArtifact, CheckInRecord, SessionError, SessionEvent, SessionState};
use gc_core::SessionConfig;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// One user check-in session.
///
/// Construction starts acquisition immediately and exactly once: the
/// session never issues a second position request, so a fresh
/// `Acquiring` state always means a fresh session (and a fresh fix).
///
/// Teardown happens through [`close`](Self::close) or `Drop`; a pending
/// position request is cancelled and its completion, if it races the
/// teardown, is discarded without touching the state.
pub struct CheckInSession {
    reference: ReferencePoint,
    capture_available: bool,
    state_tx: watch::Sender<SessionState>,
    closed: Arc<AtomicBool>,
    fix_task: Mutex<Option<JoinHandle<()>>>,
}

impl CheckInSession {
    /// Begin a session against the given reference point.
    ///
    /// `capture_available` records whether the caller has any camera to
    /// offer; submitting a capture on a session constructed without one
    /// is rejected.
    pub fn begin(
        reference: ReferencePoint,
        position_provider: Arc<dyn PositionProviderPort>,
        capture_available: bool,
        config: SessionConfig,
    ) -> Self {
        let (state_tx, _) = watch::channel(SessionState::Acquiring);
        let closed = Arc::new(AtomicBool::new(false));

        let task = tokio::spawn(Self::acquire_fix(
            reference,
            position_provider,
            config,
            state_tx.clone(),
            Arc::clone(&closed),
        ));

        Self {
            reference,
            capture_available,
            state_tx,
            closed,
            fix_task: Mutex::new(Some(task)),
        }
    }

    /// The single-shot position request. One completion, success or
    /// error; nothing commits after teardown.
    async fn acquire_fix(
        reference: ReferencePoint,
        provider: Arc<dyn PositionProviderPort>,
        config: SessionConfig,
        state_tx: watch::Sender<SessionState>,
        closed: Arc<AtomicBool>,
    ) {
        let result = provider.current_position().await;

        if closed.load(Ordering::SeqCst) {
            return;
        }

        let event = match result {
            Ok(sample) => {
                if !config.accepts_accuracy(sample.accuracy_meters) {
                    warn!(
                        accuracy = ?sample.accuracy_meters,
                        threshold = ?config.max_accuracy_meters,
                        "discarding untrustworthy fix, still acquiring"
                    );
                    return;
                }
                let verdict = DistanceVerdict::evaluate(&sample, &reference);
                info!(
                    distance_meters = verdict.distance_meters,
                    within_range = verdict.within_range,
                    "position fix acquired"
                );
                SessionEvent::FixAcquired { sample, verdict }
            }
            Err(error) => {
                warn!(%error, "position acquisition failed");
                SessionEvent::FixFailed {
                    message: error.message().to_string(),
                }
            }
        };

        state_tx.send_if_modified(|state| {
            if closed.load(Ordering::SeqCst) {
                return false;
            }
            match state.apply(event) {
                Ok(next) => {
                    *state = next;
                    true
                }
                // Only reachable if the driving layer broke the
                // single-shot contract; keep the state intact.
                Err(error) => {
                    warn!(%error, "fix completion rejected");
                    false
                }
            }
        });
    }

    /// Read-only snapshot of the current state.
    pub fn current_state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to state changes, for per-state rendering.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Wait until the position fix resolved one way or the other.
    ///
    /// Blocks for as long as the provider does; no timeout is imposed
    /// here.
    pub async fn wait_for_fix(&self) -> SessionState {
        let mut rx = self.state_tx.subscribe();
        let resolved = rx
            .wait_for(|state| !matches!(state, SessionState::Acquiring))
            .await
            .map(|state| state.clone());
        match resolved {
            Ok(state) => state,
            // The sender lives in self, so this is unreachable; fall
            // back to a snapshot rather than panic.
            Err(_) => self.current_state(),
        }
    }

    /// Whether this session was constructed with a capture device.
    pub fn capture_available(&self) -> bool {
        self.capture_available
    }

    /// Accept a captured selfie. Only legal while in range.
    pub fn submit_capture(&self, artifact: CaptureArtifact) -> Result<(), SessionError> {
        if !self.capture_available {
            return Err(SessionError::CaptureDevice(
                "no capture device available".into(),
            ));
        }
        self.apply(SessionEvent::CaptureSubmitted { artifact })
    }

    /// Drop the captured selfie to retake it; returns to the previously
    /// computed verdict without re-querying position.
    pub fn discard_capture(&self) -> Result<(), SessionError> {
        self.apply(SessionEvent::CaptureDiscarded)
    }

    /// True iff the session holds an accepted capture. The sole
    /// authority for enabling the check-in action.
    pub fn ready_to_check_in(&self) -> bool {
        self.state_tx.borrow().ready_to_check_in()
    }

    /// Produce the immutable record for the transmission layer.
    ///
    /// Performs no I/O; the session stays in `Captured` so the record
    /// can be re-read.
    pub fn finalize_check_in(&self) -> Result<CheckInRecord, SessionError> {
        match &*self.state_tx.borrow() {
            SessionState::Captured {
                sample,
                verdict,
                artifact,
            } => Ok(CheckInRecord::new(
                self.reference,
                *sample,
                *verdict,
                artifact.clone(),
            )),
            state => Err(SessionError::NotReady { state: state.name() }),
        }
    }

    /// Tear the session down: cancel a pending position request and
    /// ensure no late completion commits. Idempotent.
    pub fn close(&self) {
        // The flag is set under the watch sender's lock, the same lock
        // the fix task commits under; once this call returns, any
        // still-racing completion observes the flag and discards itself.
        self.state_tx.send_if_modified(|_| {
            self.closed.store(true, Ordering::SeqCst);
            false
        });
        if let Some(task) = self.fix_task.lock().unwrap().take() {
            task.abort();
            info!("check-in session closed");
        }
    }

    fn apply(&self, event: SessionEvent) -> Result<(), SessionError> {
        let mut result = Ok(());
        self.state_tx.send_if_modified(|state| {
            let from = state.name();
            match state.apply(event) {
                Ok(next) => {
                    info!(from, to = next.name(), "session transition");
                    *state = next;
                    true
                }
                Err(error) => {
                    result = Err(error);
                    false
                }
            }
        });
        result
    }
}

impl Drop for CheckInSession {
    fn drop(&mut self) {
        self.close();
    }
}
