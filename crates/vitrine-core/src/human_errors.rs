// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the UI.
//
// Every technical error is mapped to plain English with a clear suggestion.
// Severity drives how the page presents it (inline hint vs. error banner).

use crate::error::VitrineError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Network blip or server hiccup; trying again may work.
    Transient,
    /// The user has to change what they entered.
    ActionRequired,
    /// Retrying will not help.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether a "Try again" button makes sense.
    pub retriable: bool,
    pub severity: Severity,
}

/// Convert a `VitrineError` into a `HumanError`.
pub fn humanize_error(err: &VitrineError) -> HumanError {
    match err {
        VitrineError::Network(detail) => humanize_network_error(detail),

        VitrineError::Parse(_) => HumanError {
            message: "We received something unexpected from the server.".into(),
            suggestion: "Please try again in a few minutes.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        VitrineError::Http { status, .. } if *status >= 500 => HumanError {
            message: "Our server is having a problem.".into(),
            suggestion: "Please try again in a few minutes.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        VitrineError::Http { status, .. } => HumanError {
            message: "The request could not be completed.".into(),
            suggestion: format!("Check what you entered and try again. (HTTP {status})"),
            retriable: false,
            severity: Severity::Permanent,
        },

        VitrineError::Rejected(detail) => HumanError {
            message: "The request was not accepted.".into(),
            suggestion: if detail.is_empty() {
                "Check your details and try again.".into()
            } else {
                detail.clone()
            },
            retriable: false,
            severity: Severity::ActionRequired,
        },

        VitrineError::Validation(detail) => HumanError {
            message: detail.clone(),
            suggestion: "Correct the highlighted field and submit again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        VitrineError::FileTooLarge { .. } => HumanError {
            message: "File size should be less than 5MB".into(),
            suggestion: "Choose a smaller file, or save your résumé as a PDF.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        VitrineError::NotLoggedIn => HumanError {
            message: "You need to log in first.".into(),
            suggestion: "Log in with your email or mobile number, then try again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        VitrineError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Try choosing the file again.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your device's storage may be full.".into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        VitrineError::Serialization(_) => HumanError {
            message: "The app had an internal data problem.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
    }
}

fn humanize_network_error(detail: &str) -> HumanError {
    let lower = detail.to_ascii_lowercase();

    if lower.contains("timed out") || lower.contains("timeout") {
        HumanError {
            message: "The server didn't respond in time.".into(),
            suggestion: "Your connection may be slow. Please try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        }
    } else {
        HumanError {
            message: "Unable to reach the server.".into(),
            suggestion: "Please check your connection or try again later.".into(),
            retriable: true,
            severity: Severity::Transient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_transient() {
        let err = VitrineError::Network("operation timed out".into());
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Transient);
        assert!(human.retriable);
        assert!(human.message.contains("in time"));
    }

    #[test]
    fn validation_message_is_shown_verbatim() {
        let human = humanize_error(&VitrineError::validation("Please select who you are."));
        assert_eq!(human.message, "Please select who you are.");
        assert_eq!(human.severity, Severity::ActionRequired);
    }

    #[test]
    fn server_errors_are_retriable_client_errors_are_not() {
        let five = VitrineError::Http { status: 503, endpoint: "service_search".into() };
        let four = VitrineError::Http { status: 404, endpoint: "service_search".into() };
        assert!(humanize_error(&five).retriable);
        assert!(!humanize_error(&four).retriable);
    }
}
