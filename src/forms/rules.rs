//! Field rules and the validation engine.
//!
//! Rules are evaluated in fixed precedence: the required check first,
//! short-circuiting everything else when an empty value is required, then
//! the shape check for the field kind, applied only to non-empty values.
//! Each field yields at most one violation; the first failing rule wins.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Locale;
use crate::i18n;

/// Shape check applied to a non-empty field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text, no shape check
    Text,

    /// Email address: one `@`, non-empty halves, dotted domain, no whitespace
    Email,

    /// Person name: letters (diacritics included) and spaces only
    Name,

    /// Minimum length in chars
    MinLength(usize),
}

/// Validation rule for a single form field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRule {
    /// Field name, matching the form input name
    pub name: String,

    /// Whether an empty value is itself a violation
    #[serde(default)]
    pub required: bool,

    /// Shape check for non-empty values
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub kind: FieldKind,
}

/// Why a field value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    /// Required field left empty
    Required,

    /// Email shape check failed
    InvalidEmail,

    /// Name contained something other than letters and spaces
    InvalidName,

    /// Value shorter than the minimum length
    TooShort { min: usize },
}

/// A single per-field validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the offending field
    pub field: String,

    /// Which rule was violated
    pub violation: RuleViolation,
}

impl ValidationError {
    /// Localized message for this error
    pub fn message(&self, locale: Locale) -> String {
        i18n::violation_message(&self.violation, locale)
    }
}

/// Schema configuration errors, fatal at setup
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    #[error("Duplicate field in form '{form}': {field}")]
    DuplicateField { form: String, field: String },

    #[error("Empty field name in form '{form}'")]
    EmptyFieldName { form: String },

    #[error("min_length must be at least 1 (field '{field}' in form '{form}')")]
    ZeroMinLength { form: String, field: String },
}

/// A named set of field rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSchema {
    /// Form name, for diagnostics and submit requests
    pub name: String,

    /// Rules, in the order fields appear on the form
    pub fields: Vec<FieldRule>,
}

impl FormSchema {
    /// Parse a schema from YAML and validate it.
    ///
    /// An unknown field kind fails here, at setup, rather than silently
    /// passing validation later.
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        use anyhow::Context;

        let schema: FormSchema =
            serde_yaml::from_str(yaml).context("Failed to parse form schema")?;
        schema.validate()?;
        Ok(schema)
    }

    /// Check the schema configuration itself
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen: Vec<&str> = Vec::new();

        for rule in &self.fields {
            if rule.name.is_empty() {
                return Err(SchemaError::EmptyFieldName {
                    form: self.name.clone(),
                });
            }
            if seen.contains(&rule.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    form: self.name.clone(),
                    field: rule.name.clone(),
                });
            }
            if let FieldKind::MinLength(0) = rule.kind {
                return Err(SchemaError::ZeroMinLength {
                    form: self.name.clone(),
                    field: rule.name.clone(),
                });
            }
            seen.push(&rule.name);
        }

        Ok(())
    }

    /// The portal's contact form
    pub fn contact() -> Self {
        Self {
            name: "contact".to_string(),
            fields: vec![
                FieldRule {
                    name: "name".to_string(),
                    required: true,
                    kind: FieldKind::Name,
                },
                FieldRule {
                    name: "email".to_string(),
                    required: true,
                    kind: FieldKind::Email,
                },
                FieldRule {
                    name: "subject".to_string(),
                    required: true,
                    kind: FieldKind::Text,
                },
                FieldRule {
                    name: "message".to_string(),
                    required: true,
                    kind: FieldKind::MinLength(10),
                },
            ],
        }
    }

    /// The footer newsletter form
    pub fn newsletter() -> Self {
        Self {
            name: "newsletter".to_string(),
            fields: vec![FieldRule {
                name: "email".to_string(),
                required: true,
                kind: FieldKind::Email,
            }],
        }
    }

    /// Rule for a field name, if the schema has one
    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|r| r.name == field)
    }
}

/// Validate one value against one rule.
///
/// The value is trimmed first, matching what the form inputs submit.
pub fn validate_field(value: &str, rule: &FieldRule) -> Option<ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        if rule.required {
            return Some(ValidationError {
                field: rule.name.clone(),
                violation: RuleViolation::Required,
            });
        }
        // Optional and empty: shape checks do not apply
        return None;
    }

    let violation = match rule.kind {
        FieldKind::Text => None,
        FieldKind::Email => (!is_valid_email(value)).then_some(RuleViolation::InvalidEmail),
        FieldKind::Name => (!is_valid_name(value)).then_some(RuleViolation::InvalidName),
        FieldKind::MinLength(min) => {
            (value.chars().count() < min).then_some(RuleViolation::TooShort { min })
        }
    };

    violation.map(|violation| ValidationError {
        field: rule.name.clone(),
        violation,
    })
}

/// Validate every field carrying a rule, in schema order.
///
/// At most one error per field; the form is valid iff the result is empty.
/// Fields absent from `values` are treated as empty.
pub fn validate_form(schema: &FormSchema, values: &[(String, String)]) -> Vec<ValidationError> {
    schema
        .fields
        .iter()
        .filter_map(|rule| {
            let value = values
                .iter()
                .find(|(name, _)| name == &rule.name)
                .map(|(_, v)| v.as_str())
                .unwrap_or("");
            validate_field(value, rule)
        })
        .collect()
}

/// Email shape check: single `@`, non-empty local part, dotted domain,
/// no whitespace anywhere. Mirrors the portal's submit-time pattern.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

/// Name shape check: alphabetic chars and spaces only, diacritics allowed
fn is_valid_name(value: &str) -> bool {
    value.chars().all(|c| c.is_alphabetic() || c == ' ')
}
