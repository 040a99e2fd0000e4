//! Outward send port.
//!
//! The workflow treats delivery as an opaque fallible async operation: it
//! hands over a [`FormValues`] snapshot and awaits success or a
//! [`SendError`]. There is no partial-progress signal and no cancellation.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::field::FormValues;

/// Failure delivering a submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SendError {
    #[error("request timed out")]
    Timeout,
    #[error("service unavailable: {0}")]
    Unavailable(String),
    #[error("submission rejected by server (status {0})")]
    Rejected(u16),
}

/// Asynchronous delivery of form submissions.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver one submission. Resolves once the outcome is known.
    async fn send(&self, values: &FormValues) -> Result<(), SendError>;
}

/// Stand-in transport with a fixed latency and a scripted outcome.
///
/// Mirrors the original page's simulated API call: wait a moment, then
/// succeed. A failure outcome can be scripted for demos and tests.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    latency: Duration,
    outcome: Result<(), SendError>,
}

impl SimulatedTransport {
    /// Succeeds after the default 1500 ms latency.
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(1500),
            outcome: Ok(()),
        }
    }

    /// Override the simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Script a failure outcome.
    pub fn failing(mut self, error: SendError) -> Self {
        self.outcome = Err(error);
        self
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for SimulatedTransport {
    async fn send(&self, values: &FormValues) -> Result<(), SendError> {
        log::debug!("simulated send for {} <{}>", values.name, values.email);
        tokio::time::sleep(self.latency).await;
        self.outcome.clone()
    }
}
