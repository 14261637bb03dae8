//! Notification email sent to the site owner for each contact submission.

use serde::{Deserialize, Serialize};

use super::contact_submission::ContactSubmission;

/// A fully composed notification message, ready for an email provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    /// Fixed sender address
    pub from: String,

    /// Recipients; always the single fixed owner address
    pub to: Vec<String>,

    /// Subject line naming the submitter
    pub subject: String,

    /// HTML body
    pub html: String,

    /// Plain-text body
    pub text: String,

    /// Submitter's address, so a reply goes straight back to them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

impl OutboundEmail {
    /// Compose the notification for a submission.
    ///
    /// Submitter fields are embedded verbatim. In the HTML variant every
    /// newline of the message becomes `<br>`; the text variant keeps the
    /// message untouched.
    pub fn compose(submission: &ContactSubmission, from: &str, to: &str) -> Self {
        let name = submission.full_name();

        let html = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #333;">New Contact Form Submission</h2>
  <div style="background: #f9f9f9; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Message:</strong></p>
    <div style="background: white; padding: 15px; border-radius: 5px; margin-top: 10px;">
      {message}
    </div>
  </div>
  <p style="color: #666; font-size: 12px;">
    This message was sent from your website contact form.
  </p>
</div>"#,
            name = name,
            email = submission.email,
            message = submission.message.replace('\n', "<br>"),
        );

        let text = format!(
            "New Contact Form Submission\n\n\
             Name: {name}\n\
             Email: {email}\n\n\
             Message:\n\
             {message}\n\n\
             This message was sent from your website contact form.\n",
            name = name,
            email = submission.email,
            message = submission.message,
        );

        Self {
            from: from.to_string(),
            to: vec![to.to_string()],
            subject: format!("New Contact Form Submission from {}", name),
            html,
            text,
            reply_to: Some(submission.email.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello\nWorld".to_string(),
            captcha_token: "tok123".to_string(),
        }
    }

    #[test]
    fn test_compose_addresses_and_subject() {
        let email = OutboundEmail::compose(&submission(), "onboarding@resend.dev", "owner@example.com");

        assert_eq!(email.from, "onboarding@resend.dev");
        assert_eq!(email.to, vec!["owner@example.com".to_string()]);
        assert_eq!(email.subject, "New Contact Form Submission from Jane Doe");
        assert_eq!(email.reply_to.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_html_converts_newlines_text_does_not() {
        let email = OutboundEmail::compose(&submission(), "from@example.com", "to@example.com");

        assert!(email.html.contains("Hello<br>World"));
        assert!(email.html.contains("<strong>Name:</strong> Jane Doe"));
        assert!(email.html.contains("<strong>Email:</strong> jane@example.com"));
        assert!(email.text.contains("Hello\nWorld"));
        assert!(!email.text.contains("<br>"));
        assert!(email.text.contains("Name: Jane Doe"));
    }

    #[test]
    fn test_fields_are_embedded_verbatim() {
        let mut raw = submission();
        raw.message = "<b>hi</b>".to_string();
        let email = OutboundEmail::compose(&raw, "from@example.com", "to@example.com");
        assert!(email.html.contains("<b>hi</b>"));
    }
}
