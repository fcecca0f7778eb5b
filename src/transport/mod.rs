//! Transport interfaces for external services.
//!
//! The portal has no real backend: submission, sharing, and the clipboard
//! are all external collaborators. They are modeled as async traits so
//! the core stays testable and the simulated implementations can be
//! swapped for real ones without touching the engines.

pub mod mock;
pub mod share;

use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub use mock::{MockOutcome, MockTransport};
pub use share::{share_content, Clipboard, ShareTarget};

/// A fully validated form submission, ready for a transport
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SubmitRequest {
    /// Unique request identifier
    pub id: Uuid,

    /// Name of the originating form ("contact", "newsletter")
    pub form: String,

    /// Trimmed field values, keyed by field name
    pub fields: BTreeMap<String, String>,

    /// When the request was built
    pub submitted_at: DateTime<Utc>,
}

impl SubmitRequest {
    /// Build a request for a form from already-validated values
    pub fn new(form: impl Into<String>, values: &[(String, String)]) -> Self {
        Self {
            id: Uuid::new_v4(),
            form: form.into(),
            fields: values
                .iter()
                .map(|(name, value)| (name.clone(), value.trim().to_string()))
                .collect(),
            submitted_at: Utc::now(),
        }
    }
}

/// What the backend said about a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submission accepted
    Accepted,

    /// Submission rejected by the backend
    Rejected { reason: String },
}

/// Trait for submission transports
#[async_trait]
pub trait Transport: Send + Sync {
    /// Human-readable transport name
    fn name(&self) -> &str;

    /// Deliver a submit request.
    ///
    /// `Err` means the transport itself broke (the network-failure case);
    /// a backend that answered "no" is `Ok(Rejected)`.
    async fn submit(&self, request: &SubmitRequest) -> Result<SubmitOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_trims_and_keys_fields() {
        let values = vec![
            ("email".to_string(), "  a@b.co  ".to_string()),
            ("name".to_string(), "José".to_string()),
        ];

        let request = SubmitRequest::new("contact", &values);

        assert_eq!(request.form, "contact");
        assert_eq!(request.fields.get("email").unwrap(), "a@b.co");
        assert_eq!(request.fields.get("name").unwrap(), "José");
    }
}
