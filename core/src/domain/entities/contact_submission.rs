//! Contact submission entity for the site's contact form.

use ep_shared::types::ContactPayload;
use serde::{Deserialize, Serialize};

/// A single contact form submission, including the one-time verification
/// token the client obtained from the captcha widget.
///
/// Lives for one request only; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Submitter's first name
    pub first_name: String,

    /// Submitter's last name
    pub last_name: String,

    /// Submitter's email address, used as reply-to on the notification
    pub email: String,

    /// Free-text message, embedded verbatim in the notification
    pub message: String,

    /// One-time verification token issued by the captcha widget
    pub captcha_token: String,
}

impl ContactSubmission {
    /// "First Last", as shown in the subject line and body
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<ContactPayload> for ContactSubmission {
    fn from(payload: ContactPayload) -> Self {
        Self {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            message: payload.message,
            captcha_token: payload.captcha_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_payload_keeps_fields_verbatim() {
        let submission = ContactSubmission::from(ContactPayload {
            first_name: " Jane".to_string(),
            last_name: "Doe ".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello\nWorld".to_string(),
            captcha_token: "tok123".to_string(),
        });

        assert_eq!(submission.full_name(), " Jane Doe ");
        assert_eq!(submission.message, "Hello\nWorld");
        assert_eq!(submission.captcha_token, "tok123");
    }
}
