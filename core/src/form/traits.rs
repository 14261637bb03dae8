//! Traits for the form controller's collaborators

use async_trait::async_trait;
use ep_shared::types::ContactPayload;

/// Transport that delivers a submission to the contact endpoint
#[async_trait]
pub trait ContactClientTrait: Send + Sync {
    /// Send one request, returning the HTTP status code of the response.
    ///
    /// `Err` means no response arrived at all (network failure).
    async fn post_contact(&self, payload: &ContactPayload) -> Result<u16, String>;
}

/// Handle to the embedded captcha widget
pub trait CaptchaWidget: Send + Sync {
    /// Discard the solved challenge so a fresh token must be obtained
    fn reset(&self);
}
