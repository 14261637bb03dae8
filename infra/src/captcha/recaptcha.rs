//! Google reCAPTCHA Verification
//!
//! Verifies widget tokens against the siteverify endpoint. The request is
//! form-encoded and carries the server-held secret, the client's token and,
//! when known, the client's IP address.

use async_trait::async_trait;
use tracing::{debug, warn};

use ep_core::services::contact::{CaptchaVerification, CaptchaVerifierTrait};
use ep_shared::config::contact::ContactConfig;

use crate::InfrastructureError;

/// reCAPTCHA verifier configuration
#[derive(Debug, Clone)]
pub struct ReCaptchaConfig {
    /// Server-held secret; absent means verification fails at the provider
    pub secret: Option<String>,
    /// siteverify endpoint
    pub verify_url: String,
}

impl From<&ContactConfig> for ReCaptchaConfig {
    fn from(config: &ContactConfig) -> Self {
        Self {
            secret: config.recaptcha_secret.clone(),
            verify_url: config.recaptcha_verify_url.clone(),
        }
    }
}

/// reCAPTCHA siteverify client
pub struct ReCaptchaVerifier {
    client: reqwest::Client,
    config: ReCaptchaConfig,
}

impl ReCaptchaVerifier {
    /// Create a new verifier on a shared HTTP client
    pub fn new(client: reqwest::Client, config: ReCaptchaConfig) -> Self {
        if config.secret.is_none() {
            warn!("RECAPTCHA_SECRET_KEY is not set; every token will be rejected by the provider");
        }
        Self { client, config }
    }

    /// Ask the provider about a token
    pub async fn verify_token(
        &self,
        token: &str,
        remote_ip: Option<&str>,
    ) -> Result<CaptchaVerification, InfrastructureError> {
        let mut form = vec![
            ("secret", self.config.secret.as_deref().unwrap_or_default()),
            ("response", token),
        ];
        if let Some(ip) = remote_ip {
            form.push(("remoteip", ip));
        }

        let response = self
            .client
            .post(&self.config.verify_url)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let verification = response
            .json::<CaptchaVerification>()
            .await
            .map_err(|e| InfrastructureError::Decode(e.to_string()))?;

        debug!(
            success = verification.success,
            hostname = ?verification.hostname,
            error_codes = ?verification.error_codes,
            "reCAPTCHA siteverify answered"
        );

        Ok(verification)
    }
}

#[async_trait]
impl CaptchaVerifierTrait for ReCaptchaVerifier {
    async fn verify(&self, token: &str, remote_ip: Option<&str>) -> Result<CaptchaVerification, String> {
        self.verify_token(token, remote_ip)
            .await
            .map_err(|e| e.to_string())
    }
}
