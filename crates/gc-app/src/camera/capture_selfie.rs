use std::sync::Arc;

use gc_core::ports::{CaptureDevicePort, FacingMode};
use gc_core::session::{CaptureArtifact, SessionError};
use tracing::{info, warn};

use super::CameraStream;

/// Use case that captures one selfie from the camera device.
///
/// ## Responsibility
///
/// Open the device stream, capture the current frame, and release the
/// stream again, whatever happens in between. The artifact it returns
/// is what the caller submits to the session once the geofence allows
/// it.
///
/// ## What this use case does NOT do
///
/// - Decide whether a capture is allowed right now (the session's
///   geofence gate does, at submit time)
/// - Retry a failed capture; a camera failure is surfaced as a
///   [`SessionError::CaptureDevice`] value and leaves the session's
///   position fix untouched
pub struct CaptureSelfie {
    device: Arc<dyn CaptureDevicePort>,
}

impl CaptureSelfie {
    pub fn new(device: Arc<dyn CaptureDevicePort>) -> Self {
        Self { device }
    }

    pub async fn execute(&self, facing: FacingMode) -> Result<CaptureArtifact, SessionError> {
        let stream = CameraStream::open(Arc::clone(&self.device), facing)
            .await
            .map_err(|error| {
                warn!(%error, "failed to open camera stream");
                SessionError::CaptureDevice(error.to_string())
            })?;

        let artifact = stream.capture_still().await.map_err(|error| {
            warn!(%error, "frame capture failed");
            SessionError::CaptureDevice(error.to_string())
        })?;

        info!(
            bytes = artifact.len(),
            mime = artifact.mime_type(),
            "selfie captured"
        );
        Ok(artifact)
    }
}
