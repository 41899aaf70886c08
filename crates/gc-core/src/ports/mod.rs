//! Port interfaces for the application layer
//!
//! Ports define the contract between the session logic (use cases)
//! and device implementations. This follows Hexagonal Architecture
//! principles: the core never touches a sensor or a camera directly.

pub mod capture;
pub mod position;

pub use capture::{CaptureDevicePort, CaptureError, FacingMode, StreamHandle};
pub use position::{PositionError, PositionProviderPort};
