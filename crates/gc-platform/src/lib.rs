//! # gc-platform
//!
//! Device implementations for GeoCheckin.
//!
//! This crate contains in-process implementations of the gc-core ports:
//! a simulated position sensor and a simulated camera. Integration
//! tests and demos drive the session against these instead of real
//! hardware.

pub mod camera;
pub mod position;

pub use camera::SimulatedCamera;
pub use position::SimulatedPositionProvider;
