//! Check-in session domain: tagged state, events, and the pure
//! transition function.
//!
//! Runtime behaviors (spawning the position request, camera stream
//! lifecycle, cancellation) are handled by the application layer
//! (gc-app); everything here is side-effect free.

mod artifact;
mod error;
mod event;
mod record;
mod state;

pub use artifact::CaptureArtifact;
pub use error::SessionError;
pub use event::SessionEvent;
pub use record::CheckInRecord;
pub use state::SessionState;
