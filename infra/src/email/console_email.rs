//! Console Email Sender
//!
//! Logs notification mail instead of sending it. Used for local development,
//! where no Resend key is available.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use ep_core::domain::OutboundEmail;
use ep_core::services::contact::{EmailDeliveryError, EmailSenderTrait};

/// Console email sender for development and testing
#[derive(Clone, Default)]
pub struct ConsoleEmailSender {
    /// Counter for tracking number of messages "sent"
    message_count: Arc<AtomicU64>,
}

impl ConsoleEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of messages logged
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailSenderTrait for ConsoleEmailSender {
    fn is_configured(&self) -> bool {
        true
    }

    fn provider_name(&self) -> &str {
        "console"
    }

    async fn send_email(&self, email: &OutboundEmail) -> Result<String, EmailDeliveryError> {
        self.message_count.fetch_add(1, Ordering::SeqCst);
        let id = format!("console-{}", Uuid::new_v4());

        info!(
            id = %id,
            from = %email.from,
            to = ?email.to,
            subject = %email.subject,
            "[CONSOLE EMAIL]\n{}",
            email.text
        );

        Ok(id)
    }
}
