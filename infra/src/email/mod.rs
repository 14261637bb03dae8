//! Email Service Module
//!
//! Implementations of the core `EmailSenderTrait`:
//!
//! - **Resend**: Production delivery via the Resend API
//! - **Console**: Logs messages, for development

use std::sync::Arc;

use ep_core::services::contact::EmailSenderTrait;
use ep_shared::config::{ContactConfig, EmailProvider};

pub mod console_email;
pub mod resend;

pub use console_email::ConsoleEmailSender;
pub use resend::{ResendConfig, ResendEmailSender};

/// Create the email sender selected by configuration.
///
/// A Resend sender is returned even without an API key; the relay checks
/// [`EmailSenderTrait::is_configured`] before every send and refuses then.
pub fn create_email_sender(config: &ContactConfig, client: reqwest::Client) -> Arc<dyn EmailSenderTrait> {
    match config.email_provider {
        EmailProvider::Resend => {
            if !config.has_email_credential() {
                tracing::warn!("RESEND_API_KEY is not set; contact submissions will be refused");
            }
            Arc::new(ResendEmailSender::new(client, ResendConfig::from(config)))
        }
        EmailProvider::Console => {
            tracing::warn!("Using console email sender; messages will only be logged");
            Arc::new(ConsoleEmailSender::new())
        }
    }
}
