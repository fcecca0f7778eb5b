//! Simulated submission transport.
//!
//! Stands in for the backend the production portal would call. Latency
//! and outcome are scripted, so tests can exercise the success and the
//! failure path deterministically, without real delays (tokio's paused
//! clock skips the sleep).

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use super::{SubmitOutcome, SubmitRequest, Transport};

/// Scripted behavior for the mock transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOutcome {
    /// Backend accepts the submission
    Accept,

    /// Backend answers with a rejection
    Reject(String),

    /// The transport itself fails (simulated network error)
    Error(String),
}

/// Transport that sleeps for a configured latency, then answers as scripted
pub struct MockTransport {
    latency: Duration,
    outcome: MockOutcome,
}

impl MockTransport {
    /// Accepting transport with the portal's simulated 2s latency
    pub fn new() -> Self {
        Self {
            latency: Duration::from_secs(2),
            outcome: MockOutcome::Accept,
        }
    }

    /// Override the simulated latency
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Override the scripted outcome
    pub fn with_outcome(mut self, outcome: MockOutcome) -> Self {
        self.outcome = outcome;
        self
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn name(&self) -> &str {
        "mock"
    }

    async fn submit(&self, request: &SubmitRequest) -> Result<SubmitOutcome> {
        tokio::time::sleep(self.latency).await;

        tracing::debug!(
            request = %request.id,
            form = %request.form,
            "Mock transport answered"
        );

        match &self.outcome {
            MockOutcome::Accept => Ok(SubmitOutcome::Accepted),
            MockOutcome::Reject(reason) => Ok(SubmitOutcome::Rejected {
                reason: reason.clone(),
            }),
            MockOutcome::Error(message) => anyhow::bail!("{}", message),
        }
    }
}
