//! Capture device port - abstracts the camera.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::session::CaptureArtifact;

/// Which camera to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacingMode {
    /// Front-facing ("selfie") camera.
    User,
    /// Back-facing camera.
    Environment,
}

impl FacingMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::User => Self::Environment,
            Self::Environment => Self::User,
        }
    }
}

/// Handle to one open device stream.
///
/// Deliberately neither `Clone` nor `Copy`: stopping consumes the
/// handle, so a stream cannot be stopped twice through the same handle.
#[derive(Debug, PartialEq, Eq)]
pub struct StreamHandle {
    id: u64,
    facing: FacingMode,
}

impl StreamHandle {
    pub fn new(id: u64, facing: FacingMode) -> Self {
        Self { id, facing }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn facing(&self) -> FacingMode {
        self.facing
    }
}

/// Port for the camera device.
///
/// # Behavior
/// - At most one stream is open per session at a time; switching facing
///   modes tears down and re-acquires the stream.
/// - `stop_stream()` is synchronous and infallible so that scope guards
///   can release the device on every exit path, including `Drop`.
/// - `stop_stream()` must tolerate handles whose stream already ended
///   on the device side.
#[async_trait]
pub trait CaptureDevicePort: Send + Sync {
    /// Open the device stream for the given facing mode.
    async fn start_stream(&self, facing: FacingMode) -> Result<StreamHandle, CaptureError>;

    /// Encode the current frame of an open stream as a still image.
    async fn capture_frame(&self, handle: &StreamHandle) -> Result<CaptureArtifact, CaptureError>;

    /// Release the device stream.
    fn stop_stream(&self, handle: StreamHandle);
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    #[error("camera permission denied: {0}")]
    PermissionDenied(String),

    #[error("camera busy or unavailable: {0}")]
    DeviceBusy(String),

    #[error("no open stream for handle {0}")]
    StreamClosed(u64),

    #[error("frame encoding failed: {0}")]
    Encoding(String),
}
