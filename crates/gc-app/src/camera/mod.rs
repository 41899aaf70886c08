mod capture_selfie;
mod stream_scope;

pub use capture_selfie::CaptureSelfie;
pub use stream_scope::CameraStream;
