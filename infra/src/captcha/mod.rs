//! Captcha Verification Module
//!
//! Implementations of the core `CaptchaVerifierTrait`:
//!
//! - **reCAPTCHA**: Google siteverify over HTTPS
//! - **Mock**: Fixed verdict, for development

use std::sync::Arc;

use ep_core::services::contact::CaptchaVerifierTrait;
use ep_shared::config::{CaptchaProvider, ContactConfig};

pub mod mock_captcha;
pub mod recaptcha;

pub use mock_captcha::MockCaptchaVerifier;
pub use recaptcha::{ReCaptchaConfig, ReCaptchaVerifier};

/// Create the captcha verifier selected by configuration
pub fn create_captcha_verifier(
    config: &ContactConfig,
    client: reqwest::Client,
) -> Arc<dyn CaptchaVerifierTrait> {
    match config.captcha_provider {
        CaptchaProvider::Recaptcha => Arc::new(ReCaptchaVerifier::new(client, ReCaptchaConfig::from(config))),
        CaptchaProvider::Mock => {
            tracing::warn!("Using mock captcha verifier; every token will be accepted");
            Arc::new(MockCaptchaVerifier::new())
        }
    }
}
