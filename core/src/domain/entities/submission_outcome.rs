//! Closed result of one pass through the contact relay.

use serde::{Deserialize, Serialize};

use crate::errors::ContactError;

/// Outcome of handling a single contact submission.
///
/// Callers branch on the kind instead of matching error strings. Each kind
/// maps to exactly one HTTP status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// The provider accepted the message for delivery
    Success { email_id: String },

    /// The verifier rejected the token; nothing was sent
    VerificationFailed { error_codes: Vec<String> },

    /// No email credential is configured; nothing was sent
    ConfigMissing { provider: String },

    /// The email provider rejected the send
    DeliveryFailed { detail: serde_json::Value },

    /// Anything else: transport faults, malformed input, panics
    UnexpectedFault { message: String },
}

impl SubmissionOutcome {
    /// HTTP status code for this outcome
    pub fn status_code(&self) -> u16 {
        match self {
            SubmissionOutcome::Success { .. } => 200,
            SubmissionOutcome::VerificationFailed { .. } => 400,
            SubmissionOutcome::ConfigMissing { .. }
            | SubmissionOutcome::DeliveryFailed { .. }
            | SubmissionOutcome::UnexpectedFault { .. } => 500,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success { .. })
    }

    /// Short machine-readable kind, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionOutcome::Success { .. } => "success",
            SubmissionOutcome::VerificationFailed { .. } => "verification_failed",
            SubmissionOutcome::ConfigMissing { .. } => "config_missing",
            SubmissionOutcome::DeliveryFailed { .. } => "delivery_failed",
            SubmissionOutcome::UnexpectedFault { .. } => "unexpected_fault",
        }
    }
}

impl From<ContactError> for SubmissionOutcome {
    fn from(error: ContactError) -> Self {
        match error {
            ContactError::VerificationFailed { error_codes } => {
                SubmissionOutcome::VerificationFailed { error_codes }
            }
            ContactError::ConfigMissing { provider } => SubmissionOutcome::ConfigMissing { provider },
            ContactError::DeliveryFailed { detail } => SubmissionOutcome::DeliveryFailed { detail },
            ContactError::UnexpectedFault { message } => SubmissionOutcome::UnexpectedFault { message },
        }
    }
}

impl From<Result<String, ContactError>> for SubmissionOutcome {
    fn from(result: Result<String, ContactError>) -> Self {
        match result {
            Ok(email_id) => SubmissionOutcome::Success { email_id },
            Err(error) => error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = vec![
            (SubmissionOutcome::Success { email_id: "em_1".into() }, 200),
            (SubmissionOutcome::VerificationFailed { error_codes: vec![] }, 400),
            (SubmissionOutcome::ConfigMissing { provider: "resend".into() }, 500),
            (SubmissionOutcome::DeliveryFailed { detail: serde_json::json!({}) }, 500),
            (SubmissionOutcome::UnexpectedFault { message: "boom".into() }, 500),
        ];

        for (outcome, status) in cases {
            assert_eq!(outcome.status_code(), status, "{}", outcome.kind());
        }
    }

    #[test]
    fn test_from_result() {
        let ok: SubmissionOutcome = Ok::<_, ContactError>("em_1".to_string()).into();
        assert!(ok.is_success());

        let err: SubmissionOutcome = Err::<String, _>(ContactError::UnexpectedFault {
            message: "connection reset".into(),
        })
        .into();
        assert_eq!(err.kind(), "unexpected_fault");
    }
}
