//! Form validation and submission.
//!
//! Validation is synchronous and pure: given a schema and the field
//! values, it returns at most one violation per field. Rendering the
//! violations, and clearing them when the user edits, is presentation
//! work that stays outside this crate.

pub mod rules;
pub mod submit;

pub use rules::{
    validate_field, validate_form, FieldKind, FieldRule, FormSchema, RuleViolation, SchemaError,
    ValidationError,
};
pub use submit::{submit_form, subscribe_newsletter, SubmissionResult, SubmitRequest};
