//! User-facing notifications.
//!
//! Components that finish a user-visible action (submission, sharing)
//! return a `Notification` value. Rendering it, and dismissing it after
//! [`DISMISS_AFTER`], is the presentation layer's job.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long a rendered notification stays on screen
pub const DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Visual severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// A single user-facing notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Already-localized message text
    pub message: String,

    /// Visual severity
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        assert_eq!(Notification::success("ok").severity, Severity::Success);
        assert_eq!(Notification::error("no").severity, Severity::Error);
        assert_eq!(Notification::info("hm").severity, Severity::Info);
    }
}
