//! # gc-core
//!
//! Core domain models and business logic for GeoCheckin.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod geo;
pub mod ports;
pub mod session;

// Re-export commonly used types at the crate root
pub use config::SessionConfig;
pub use geo::{Coordinate, DistanceVerdict, GeoError, PositionSample, ReferencePoint};
pub use session::{
    CaptureArtifact, CheckInRecord, SessionError, SessionEvent, SessionState,
};
