//! Main contact relay service implementation

use std::sync::Arc;

use ep_shared::mask_email;

use crate::domain::{ContactSubmission, OutboundEmail, SubmissionOutcome};
use crate::errors::{ContactError, ContactResult};

use super::config::ContactServiceConfig;
use super::traits::{CaptchaVerifierTrait, EmailSenderTrait};

/// Contact relay: verify the token, check configuration, send the email.
///
/// Stateless; one instance serves every request and concurrent submissions
/// run fully independently. Identical submissions are not deduplicated.
pub struct ContactService {
    /// Human-verification provider
    captcha_verifier: Arc<dyn CaptchaVerifierTrait>,
    /// Transactional email provider
    email_sender: Arc<dyn EmailSenderTrait>,
    /// Service configuration
    config: ContactServiceConfig,
}

impl ContactService {
    /// Create a new contact relay service
    ///
    /// # Arguments
    ///
    /// * `captcha_verifier` - Captcha provider implementation
    /// * `email_sender` - Email provider implementation
    /// * `config` - Sender and recipient addresses
    pub fn new(
        captcha_verifier: Arc<dyn CaptchaVerifierTrait>,
        email_sender: Arc<dyn EmailSenderTrait>,
        config: ContactServiceConfig,
    ) -> Self {
        Self {
            captcha_verifier,
            email_sender,
            config,
        }
    }

    /// Handle a submission and report its outcome
    pub async fn submit(&self, submission: &ContactSubmission, remote_ip: Option<&str>) -> SubmissionOutcome {
        let outcome = SubmissionOutcome::from(self.relay(submission, remote_ip).await);

        match &outcome {
            SubmissionOutcome::Success { email_id } => tracing::info!(
                email = %mask_email(&submission.email),
                email_id = %email_id,
                "Contact submission delivered"
            ),
            SubmissionOutcome::DeliveryFailed { detail } => tracing::error!(
                email = %mask_email(&submission.email),
                detail = %detail,
                "Email provider rejected contact submission"
            ),
            other => tracing::warn!(
                email = %mask_email(&submission.email),
                outcome = other.kind(),
                "Contact submission not delivered"
            ),
        }

        outcome
    }

    /// Run the three relay steps, returning the provider's delivery id.
    ///
    /// 1. Verify the captcha token (a rejected token stops here)
    /// 2. Check that an email credential is configured
    /// 3. Compose and send the notification
    pub async fn relay(&self, submission: &ContactSubmission, remote_ip: Option<&str>) -> ContactResult<String> {
        let verification = self
            .captcha_verifier
            .verify(&submission.captcha_token, remote_ip)
            .await
            .map_err(|message| ContactError::UnexpectedFault { message })?;

        tracing::debug!(
            success = verification.success,
            hostname = ?verification.hostname,
            error_codes = ?verification.error_codes,
            "Captcha verification"
        );

        if !verification.success {
            return Err(ContactError::VerificationFailed {
                error_codes: verification.error_codes,
            });
        }

        if !self.email_sender.is_configured() {
            tracing::error!(
                provider = self.email_sender.provider_name(),
                "No email credential configured"
            );
            return Err(ContactError::ConfigMissing {
                provider: self.email_sender.provider_name().to_string(),
            });
        }

        let email = OutboundEmail::compose(submission, &self.config.from_address, &self.config.to_address);

        tracing::info!(
            provider = self.email_sender.provider_name(),
            email = %mask_email(&submission.email),
            "Sending contact notification"
        );

        let email_id = self.email_sender.send_email(&email).await?;
        Ok(email_id)
    }
}
