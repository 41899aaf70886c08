//! Simulated camera.
//!
//! Implements the capture device port against a synthetic frame source
//! and keeps start/stop counters so tests can assert that every opened
//! stream is released.

use std::io::Cursor;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use gc_core::ports::{CaptureDevicePort, CaptureError, FacingMode, StreamHandle};
use gc_core::session::CaptureArtifact;
use tracing::debug;

const FRAME_WIDTH: u32 = 64;
const FRAME_HEIGHT: u32 = 48;

/// In-memory camera device implementation.
///
/// One stream may be open at a time, matching real device semantics.
/// `capture_frame` renders a small gradient image so artifacts carry a
/// genuine encoded payload.
#[derive(Default)]
pub struct SimulatedCamera {
    next_id: AtomicU64,
    active: Mutex<Option<u64>>,
    starts: AtomicUsize,
    stops: AtomicUsize,
    capture_fault: Mutex<Option<CaptureError>>,
    start_fault: Mutex<Option<CaptureError>>,
}

impl SimulatedCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next `capture_frame` call with the given error.
    pub fn fail_next_capture(&self, error: CaptureError) {
        *self.capture_fault.lock().unwrap() = Some(error);
    }

    /// Fail the next `start_stream` call with the given error.
    pub fn fail_next_start(&self, error: CaptureError) {
        *self.start_fault.lock().unwrap() = Some(error);
    }

    /// How many streams were opened over this device's lifetime.
    pub fn start_count(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    /// How many streams were released over this device's lifetime.
    pub fn stop_count(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }

    /// Whether a stream is currently open.
    pub fn is_active(&self) -> bool {
        self.active.lock().unwrap().is_some()
    }

    fn render_frame(facing: FacingMode) -> Result<CaptureArtifact, CaptureError> {
        // Mirror the front camera horizontally, as a viewfinder would.
        let frame = image::RgbImage::from_fn(FRAME_WIDTH, FRAME_HEIGHT, |x, y| {
            let x = match facing {
                FacingMode::User => FRAME_WIDTH - 1 - x,
                FacingMode::Environment => x,
            };
            image::Rgb([
                (x * 255 / FRAME_WIDTH) as u8,
                (y * 255 / FRAME_HEIGHT) as u8,
                128,
            ])
        });
        let mut encoded = Cursor::new(Vec::new());
        frame
            .write_to(&mut encoded, image::ImageFormat::Png)
            .map_err(|e| CaptureError::Encoding(e.to_string()))?;
        Ok(CaptureArtifact::new(
            Bytes::from(encoded.into_inner()),
            "image/png",
        ))
    }
}

#[async_trait]
impl CaptureDevicePort for SimulatedCamera {
    async fn start_stream(&self, facing: FacingMode) -> Result<StreamHandle, CaptureError> {
        if let Some(error) = self.start_fault.lock().unwrap().take() {
            return Err(error);
        }
        let mut active = self.active.lock().unwrap();
        if active.is_some() {
            return Err(CaptureError::DeviceBusy(
                "a stream is already open".into(),
            ));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        *active = Some(id);
        self.starts.fetch_add(1, Ordering::SeqCst);
        debug!(id, ?facing, "camera stream opened");
        Ok(StreamHandle::new(id, facing))
    }

    async fn capture_frame(&self, handle: &StreamHandle) -> Result<CaptureArtifact, CaptureError> {
        if *self.active.lock().unwrap() != Some(handle.id()) {
            return Err(CaptureError::StreamClosed(handle.id()));
        }
        if let Some(error) = self.capture_fault.lock().unwrap().take() {
            return Err(error);
        }
        Self::render_frame(handle.facing())
    }

    fn stop_stream(&self, handle: StreamHandle) {
        let mut active = self.active.lock().unwrap();
        // Tolerates handles whose stream already ended on the device side.
        if *active == Some(handle.id()) {
            *active = None;
            self.stops.fetch_add(1, Ordering::SeqCst);
            debug!(id = handle.id(), "camera stream released");
        }
    }
}
