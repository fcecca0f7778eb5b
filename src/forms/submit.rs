//! The submission flow: validate, hand off to a transport, interpret.
//!
//! The core's contract with the outside world is narrow: given fully
//! validated input it produces a [`SubmitRequest`]; the transport's
//! answer comes back as a single status notification. Transport failures
//! are user-visible and recoverable by re-submitting; they never
//! propagate as errors.

pub use crate::transport::SubmitRequest;

use crate::domain::Locale;
use crate::i18n::{self, MessageKey};
use crate::notify::Notification;
use crate::transport::{SubmitOutcome, Transport};

use super::rules::{validate_form, FormSchema, ValidationError};

/// How a submission attempt resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Validation failed; nothing was sent. Per-field errors in schema order.
    Invalid(Vec<ValidationError>),

    /// Input was sent; the status notification says how it went
    Sent(Notification),
}

impl SubmissionResult {
    pub fn is_sent_ok(&self) -> bool {
        matches!(
            self,
            SubmissionResult::Sent(note) if note.severity == crate::notify::Severity::Success
        )
    }
}

/// Validate the values against the schema and, if clean, submit them.
pub async fn submit_form(
    schema: &FormSchema,
    values: &[(String, String)],
    transport: &dyn Transport,
    locale: Locale,
) -> SubmissionResult {
    let errors = validate_form(schema, values);
    if !errors.is_empty() {
        return SubmissionResult::Invalid(errors);
    }

    let request = SubmitRequest::new(&schema.name, values);
    tracing::info!(
        request = %request.id,
        form = %request.form,
        transport = transport.name(),
        "Submitting form"
    );

    let success_key = success_key(schema);
    let notification = match transport.submit(&request).await {
        Ok(SubmitOutcome::Accepted) => Notification::success(i18n::message(success_key, locale)),
        Ok(SubmitOutcome::Rejected { reason }) => {
            tracing::warn!(request = %request.id, %reason, "Submission rejected");
            Notification::error(i18n::message(MessageKey::SubmitError, locale))
        }
        Err(e) => {
            tracing::warn!(request = %request.id, "Submission transport failed: {}", e);
            Notification::error(i18n::message(MessageKey::SubmitError, locale))
        }
    };

    SubmissionResult::Sent(notification)
}

/// Which success banner an accepted submission shows, per form
fn success_key(schema: &FormSchema) -> MessageKey {
    match schema.name.as_str() {
        "newsletter" => MessageKey::NewsletterSuccess,
        _ => MessageKey::SubmitSuccess,
    }
}

/// The footer newsletter flow: one email field, one status banner.
///
/// Invalid input collapses into a single notification instead of
/// per-field errors.
pub async fn subscribe_newsletter(
    email: &str,
    transport: &dyn Transport,
    locale: Locale,
) -> Notification {
    let schema = FormSchema::newsletter();
    let values = vec![("email".to_string(), email.to_string())];

    match submit_form(&schema, &values, transport, locale).await {
        SubmissionResult::Invalid(_) => {
            Notification::error(i18n::message(MessageKey::NewsletterInvalidEmail, locale))
        }
        SubmissionResult::Sent(note) => note,
    }
}
