//! Traits for captcha and email provider integration

use async_trait::async_trait;

use crate::domain::OutboundEmail;
use crate::errors::EmailDeliveryError;

use super::types::CaptchaVerification;

/// Trait for human-verification providers
#[async_trait]
pub trait CaptchaVerifierTrait: Send + Sync {
    /// Check a one-time token with the provider.
    ///
    /// `Ok` carries the provider's verdict, whichever way it went. `Err` means
    /// the provider could not be asked or its answer could not be read.
    async fn verify(&self, token: &str, remote_ip: Option<&str>) -> Result<CaptchaVerification, String>;
}

/// Trait for transactional email providers
#[async_trait]
pub trait EmailSenderTrait: Send + Sync {
    /// Whether a sending credential is present
    fn is_configured(&self) -> bool;

    /// Provider name, for logs and error reports
    fn provider_name(&self) -> &str;

    /// Hand a message to the provider, returning its delivery identifier
    async fn send_email(&self, email: &OutboundEmail) -> Result<String, EmailDeliveryError>;
}
