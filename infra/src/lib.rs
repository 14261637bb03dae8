//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for The Empowering Path
//! backend. It provides concrete implementations of the provider traits
//! defined in `ep_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Captcha**: Google reCAPTCHA token verification, plus a mock verifier
//! - **Email**: Resend transactional email, plus a console sender
//! - **Client**: HTTP transport used by the contact form controller
//! - **HTTP**: construction of the shared outbound `reqwest` client

use std::sync::Arc;

use ep_core::services::contact::{CaptchaVerifierTrait, EmailSenderTrait};
use ep_shared::config::ContactConfig;

/// Captcha module - human-verification providers
pub mod captcha;

/// Client module - contact endpoint transport for the form controller
pub mod client;

/// Email module - transactional email providers
pub mod email;

/// HTTP module - outbound client construction
pub mod http;

pub use captcha::{create_captcha_verifier, MockCaptchaVerifier, ReCaptchaVerifier};
pub use client::HttpContactClient;
pub use email::{create_email_sender, ConsoleEmailSender, ResendEmailSender};
pub use http::build_http_client;

/// Provider implementations backing the contact relay
#[derive(Clone)]
pub struct ContactProviders {
    pub captcha_verifier: Arc<dyn CaptchaVerifierTrait>,
    pub email_sender: Arc<dyn EmailSenderTrait>,
}

/// Initialize the contact relay's providers
///
/// Builds one outbound HTTP client and hands it to the captcha verifier and
/// the email sender selected by configuration.
pub fn initialize(config: &ContactConfig) -> Result<ContactProviders, InfrastructureError> {
    tracing::info!(
        captcha_provider = ?config.captcha_provider,
        email_provider = ?config.email_provider,
        "Initializing contact providers"
    );

    let client = build_http_client(config)?;

    Ok(ContactProviders {
        captcha_verifier: create_captcha_verifier(config, client.clone()),
        email_sender: create_email_sender(config, client),
    })
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider answered with an error status
    #[error("Provider returned status {status}: {body}")]
    Provider { status: u16, body: String },

    /// Provider answer could not be decoded
    #[error("Failed to decode provider response: {0}")]
    Decode(String),
}
