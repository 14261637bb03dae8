//! Domain-specific error types and error handling.

use thiserror::Error;

/// Errors raised while relaying a contact submission.
///
/// One variant per failure kind of the relay; every variant converts into a
/// [`SubmissionOutcome`](crate::domain::SubmissionOutcome).
#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Captcha verification failed")]
    VerificationFailed { error_codes: Vec<String> },

    #[error("Email service not configured")]
    ConfigMissing { provider: String },

    #[error("Failed to send email")]
    DeliveryFailed { detail: serde_json::Value },

    #[error("Failed to send message: {message}")]
    UnexpectedFault { message: String },
}

/// Errors an email adapter can report for a single send
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmailDeliveryError {
    /// The provider answered and refused the message
    #[error("Email provider rejected the message: {0}")]
    Provider(serde_json::Value),

    /// The provider could not be reached or its answer could not be read
    #[error("Email transport error: {0}")]
    Transport(String),
}

impl From<EmailDeliveryError> for ContactError {
    fn from(error: EmailDeliveryError) -> Self {
        match error {
            EmailDeliveryError::Provider(detail) => ContactError::DeliveryFailed { detail },
            EmailDeliveryError::Transport(message) => ContactError::UnexpectedFault { message },
        }
    }
}

pub type ContactResult<T> = Result<T, ContactError>;

#[cfg(test)]
mod tests;
