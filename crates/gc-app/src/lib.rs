//! GeoCheckin Application Orchestration Layer
//!
//! This crate drives one check-in session: the single-shot position
//! fix, the geofence gate, and the camera stream lifecycle. All device
//! access goes through the gc-core ports.

pub mod camera;
pub mod session;

pub use camera::{CameraStream, CaptureSelfie};
pub use session::CheckInSession;
