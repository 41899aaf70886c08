//! Simulated position provider.
//!
//! Resolves a configured outcome, optionally after a delay, through an
//! in-process implementation of the position port.

use std::time::Duration;

use async_trait::async_trait;
use gc_core::geo::PositionSample;
use gc_core::ports::{PositionError, PositionProviderPort};

/// In-memory position provider implementation.
///
/// This adapter completes a single-shot position request with a
/// pre-configured sample or error. The optional delay lets tests
/// observe the `Acquiring` state and exercise cancellation while a
/// request is outstanding.
pub struct SimulatedPositionProvider {
    outcome: Result<PositionSample, PositionError>,
    delay: Option<Duration>,
}

impl SimulatedPositionProvider {
    /// A provider that resolves to the given fix.
    pub fn succeeding(sample: PositionSample) -> Self {
        Self {
            outcome: Ok(sample),
            delay: None,
        }
    }

    /// A provider that fails every request.
    pub fn failing(error: PositionError) -> Self {
        Self {
            outcome: Err(error),
            delay: None,
        }
    }

    /// Delay each completion, simulating sensor latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl PositionProviderPort for SimulatedPositionProvider {
    async fn current_position(&self) -> Result<PositionSample, PositionError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}
