//! Position provider port - abstracts the device location sensor.

use async_trait::async_trait;

use crate::geo::PositionSample;

/// Port for acquiring a single position fix.
///
/// # Behavior
/// - One request yields exactly one completion, success or error.
/// - No streaming or continuous updates; callers wanting a newer fix
///   construct a fresh session and request again.
/// - No timeout is imposed here; implementations surface their native
///   timeout (if any) as [`PositionError`].
#[async_trait]
pub trait PositionProviderPort: Send + Sync {
    /// Request the current position once.
    async fn current_position(&self) -> Result<PositionSample, PositionError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("position access denied: {0}")]
    PermissionDenied(String),

    #[error("positioning unavailable: {0}")]
    Unavailable(String),

    #[error("position device error: {0}")]
    Device(String),
}

impl PositionError {
    /// The provider-defined, human-readable message.
    pub fn message(&self) -> &str {
        match self {
            Self::PermissionDenied(m) | Self::Unavailable(m) | Self::Device(m) => m,
        }
    }
}
