//! Form Flow Integration Tests
//!
//! Contact and newsletter flows end to end: validate, submit through the
//! scripted transport, and check the localized status notification.

use std::time::Duration;

use portalkit::forms::{submit_form, validate_form, RuleViolation, SubmissionResult};
use portalkit::transport::{MockOutcome, MockTransport};
use portalkit::{FormSchema, Locale, Severity};

fn values(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_contact_validation_scenarios() {
    let schema = FormSchema::contact();

    // Empty required email reports "required", not "invalid email"
    let errors = validate_form(&schema, &values(&[("email", "")]));
    let email_error = errors.iter().find(|e| e.field == "email").unwrap();
    assert_eq!(email_error.violation, RuleViolation::Required);

    // Non-empty bad email reports the shape violation
    let errors = validate_form(&schema, &values(&[("email", "abc")]));
    let email_error = errors.iter().find(|e| e.field == "email").unwrap();
    assert_eq!(email_error.violation, RuleViolation::InvalidEmail);

    // Diacritics in names pass; digits do not
    let errors = validate_form(&schema, &values(&[("name", "José Ana")]));
    assert!(errors.iter().all(|e| e.field != "name"));

    let errors = validate_form(&schema, &values(&[("name", "John123")]));
    let name_error = errors.iter().find(|e| e.field == "name").unwrap();
    assert_eq!(name_error.violation, RuleViolation::InvalidName);
}

#[test]
fn test_error_messages_follow_locale() {
    let schema = FormSchema::contact();
    let errors = validate_form(&schema, &values(&[("message", "curta")]));
    let message_error = errors.iter().find(|e| e.field == "message").unwrap();

    assert_eq!(
        message_error.message(Locale::PtBr),
        "Mensagem deve ter pelo menos 10 caracteres"
    );
    assert_eq!(
        message_error.message(Locale::En),
        "Message should have at least 10 characters"
    );
}

#[test]
fn test_revalidation_is_stable() {
    let schema = FormSchema::contact();
    let input = values(&[
        ("name", "Maria Souza"),
        ("email", "maria@example.com.br"),
        ("subject", "Parceria"),
        ("message", "Gostaria de falar sobre uma parceria."),
    ]);

    for _ in 0..5 {
        assert!(validate_form(&schema, &input).is_empty());
    }
}

#[tokio::test(start_paused = true)]
async fn test_contact_submission_success_path() {
    let transport = MockTransport::new().with_latency(Duration::from_secs(2));
    let input = values(&[
        ("name", "Maria Souza"),
        ("email", "maria@example.com.br"),
        ("subject", "Parceria"),
        ("message", "Gostaria de falar sobre uma parceria."),
    ]);

    let result = submit_form(&FormSchema::contact(), &input, &transport, Locale::En).await;

    match result {
        SubmissionResult::Sent(note) => {
            assert_eq!(note.severity, Severity::Success);
            assert_eq!(
                note.message,
                "Message sent successfully! We will contact you within 24 hours."
            );
        }
        other => panic!("expected sent, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_transport_failure_is_a_status_not_an_error() {
    let transport = MockTransport::new()
        .with_latency(Duration::ZERO)
        .with_outcome(MockOutcome::Error("simulated outage".to_string()));
    let input = values(&[
        ("name", "Maria Souza"),
        ("email", "maria@example.com.br"),
        ("subject", "Parceria"),
        ("message", "Gostaria de falar sobre uma parceria."),
    ]);

    // The flow resolves; nothing propagates as Err. The user retries
    // manually after seeing the status message.
    let result = submit_form(&FormSchema::contact(), &input, &transport, Locale::PtBr).await;

    match result {
        SubmissionResult::Sent(note) => {
            assert_eq!(note.severity, Severity::Error);
            assert_eq!(
                note.message,
                "Erro ao enviar mensagem. Tente novamente ou entre em contato por e-mail."
            );
        }
        other => panic!("expected sent, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_invalid_input_short_circuits_the_transport() {
    // A transport scripted to fail loudly; it must never be reached
    let transport = MockTransport::new()
        .with_latency(Duration::ZERO)
        .with_outcome(MockOutcome::Error("must not be called".to_string()));

    let result = submit_form(
        &FormSchema::newsletter(),
        &values(&[("email", "not-an-email")]),
        &transport,
        Locale::En,
    )
    .await;

    match result {
        SubmissionResult::Invalid(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].violation, RuleViolation::InvalidEmail);
        }
        other => panic!("expected invalid, got {:?}", other),
    }
}

#[test]
fn test_schema_misconfiguration_fails_at_setup() {
    // Unknown kind: fails during parsing, before any validation runs
    let result = FormSchema::from_yaml(
        r#"
name: broken
fields:
  - name: phone
    required: true
    kind: telephone
"#,
    );
    assert!(result.is_err());

    // Structurally valid YAML with a bad rule: caught by schema validation
    let result = FormSchema::from_yaml(
        r#"
name: broken
fields:
  - name: message
    required: true
    kind:
      min_length: 0
"#,
    );
    assert!(result.is_err());
}
