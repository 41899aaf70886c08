//! Scoped camera stream acquisition.
//!
//! The device stream is a leak-prone resource: an open camera must be
//! released on every exit path (normal capture, capture error, facing
//! switch, abandonment). This scope makes release explicit and runs it
//! from `Drop` when a stream is abandoned, so stop calls always match
//! start calls.

use std::sync::Arc;

use gc_core::ports::{CaptureDevicePort, CaptureError, FacingMode, StreamHandle};
use gc_core::session::CaptureArtifact;
use tracing::debug;

/// An open camera stream, released when the scope ends.
pub struct CameraStream {
    device: Arc<dyn CaptureDevicePort>,
    handle: Option<StreamHandle>,
}

impl CameraStream {
    /// Start the device stream for the given facing mode.
    pub async fn open(
        device: Arc<dyn CaptureDevicePort>,
        facing: FacingMode,
    ) -> Result<Self, CaptureError> {
        let handle = device.start_stream(facing).await?;
        debug!(?facing, "camera stream scope opened");
        Ok(Self {
            device,
            handle: Some(handle),
        })
    }

    /// The facing mode of the open stream, if it is still open.
    pub fn facing(&self) -> Option<FacingMode> {
        self.handle.as_ref().map(|h| h.facing())
    }

    /// Tear down the stream and re-acquire it with the opposite camera.
    ///
    /// If re-acquisition fails the old stream is already released and
    /// the scope is left empty; the caller may retry with `open`.
    pub async fn switch_facing(&mut self) -> Result<(), CaptureError> {
        let facing = match self.handle.as_ref() {
            Some(handle) => handle.facing().toggled(),
            None => return Err(CaptureError::DeviceBusy("stream already released".into())),
        };
        self.release();
        let handle = self.device.start_stream(facing).await?;
        self.handle = Some(handle);
        Ok(())
    }

    /// Capture the current frame as a still image, then release the
    /// stream. Releases on the error path too.
    pub async fn capture_still(mut self) -> Result<CaptureArtifact, CaptureError> {
        let result = match self.handle.as_ref() {
            Some(handle) => self.device.capture_frame(handle).await,
            None => Err(CaptureError::DeviceBusy("stream already released".into())),
        };
        self.release();
        result
    }

    /// Stop the device stream. Idempotent.
    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!(id = handle.id(), "camera stream scope released");
            self.device.stop_stream(handle);
        }
    }
}

impl Drop for CameraStream {
    fn drop(&mut self) {
        self.release();
    }
}
