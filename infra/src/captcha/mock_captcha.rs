//! Mock Captcha Verifier
//!
//! Answers every token with a fixed verdict instead of asking a provider.
//! Used for local development and tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use ep_core::services::contact::{CaptchaVerification, CaptchaVerifierTrait};

/// Mock captcha verifier for development and testing
#[derive(Clone)]
pub struct MockCaptchaVerifier {
    /// Number of tokens checked
    call_count: Arc<AtomicU64>,
    /// Verdict handed out for every token
    accept: bool,
}

impl MockCaptchaVerifier {
    /// Create a verifier that accepts every token
    pub fn new() -> Self {
        Self::with_verdict(true)
    }

    /// Create a verifier with a fixed verdict
    pub fn with_verdict(accept: bool) -> Self {
        Self {
            call_count: Arc::new(AtomicU64::new(0)),
            accept,
        }
    }

    /// Get the total number of tokens checked
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockCaptchaVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaptchaVerifierTrait for MockCaptchaVerifier {
    async fn verify(&self, _token: &str, remote_ip: Option<&str>) -> Result<CaptchaVerification, String> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        info!(accept = self.accept, remote_ip = ?remote_ip, "[MOCK CAPTCHA] Token checked");

        if self.accept {
            Ok(CaptchaVerification::passed())
        } else {
            Ok(CaptchaVerification::rejected(vec!["mock-rejected".to_string()]))
        }
    }
}
