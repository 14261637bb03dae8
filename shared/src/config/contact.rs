//! Contact form relay configuration
//!
//! Credentials for the human-verification provider and the transactional
//! email provider, plus the fixed sender and recipient of notification mail.

use serde::{Deserialize, Serialize};

use super::{parse_or_default, ConfigError, Lookup};

/// Default reCAPTCHA token verification endpoint
pub const DEFAULT_RECAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Default Resend API base URL
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Default sender address (Resend's shared testing sender)
pub const DEFAULT_FROM_ADDRESS: &str = "onboarding@resend.dev";

/// Default recipient of contact form notifications
pub const DEFAULT_TO_ADDRESS: &str = "blakelypattersoncoaching@gmail.com";

/// Which captcha verifier backs the contact endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptchaProvider {
    /// Google reCAPTCHA siteverify
    Recaptcha,
    /// Accept every token (local development only)
    Mock,
}

/// Which email sender backs the contact endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Resend transactional email API
    Resend,
    /// Log messages instead of sending them (local development only)
    Console,
}

impl std::str::FromStr for CaptchaProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recaptcha" => Ok(CaptchaProvider::Recaptcha),
            "mock" => Ok(CaptchaProvider::Mock),
            _ => Err(format!("Unknown captcha provider: {}", s)),
        }
    }
}

impl std::str::FromStr for EmailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "resend" => Ok(EmailProvider::Resend),
            "console" | "mock" => Ok(EmailProvider::Console),
            _ => Err(format!("Unknown email provider: {}", s)),
        }
    }
}

/// Contact relay configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactConfig {
    /// Captcha verifier selection
    pub captcha_provider: CaptchaProvider,

    /// Server-held reCAPTCHA secret
    #[serde(skip_serializing)]
    pub recaptcha_secret: Option<String>,

    /// Public widget site key
    pub recaptcha_site_key: Option<String>,

    /// Token verification endpoint
    pub recaptcha_verify_url: String,

    /// Email sender selection
    pub email_provider: EmailProvider,

    /// Resend API key; absent means email delivery is not configured
    #[serde(skip_serializing)]
    pub resend_api_key: Option<String>,

    /// Resend API base URL
    pub resend_api_url: String,

    /// Sender address of notification mail
    pub from_address: String,

    /// Single fixed recipient of notification mail
    pub to_address: String,

    /// Upper bound on each outbound provider call
    pub outbound_timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            captcha_provider: CaptchaProvider::Recaptcha,
            recaptcha_secret: None,
            recaptcha_site_key: None,
            recaptcha_verify_url: DEFAULT_RECAPTCHA_VERIFY_URL.to_string(),
            email_provider: EmailProvider::Resend,
            resend_api_key: None,
            resend_api_url: DEFAULT_RESEND_API_URL.to_string(),
            from_address: DEFAULT_FROM_ADDRESS.to_string(),
            to_address: DEFAULT_TO_ADDRESS.to_string(),
            outbound_timeout_secs: 15,
        }
    }
}

impl ContactConfig {
    /// Load the contact relay configuration through a key lookup
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            captcha_provider: parse_or_default(lookup, "CAPTCHA_PROVIDER", defaults.captcha_provider)?,
            recaptcha_secret: lookup("RECAPTCHA_SECRET_KEY"),
            recaptcha_site_key: lookup("RECAPTCHA_SITE_KEY"),
            recaptcha_verify_url: lookup("RECAPTCHA_VERIFY_URL").unwrap_or(defaults.recaptcha_verify_url),
            email_provider: parse_or_default(lookup, "EMAIL_PROVIDER", defaults.email_provider)?,
            resend_api_key: lookup("RESEND_API_KEY"),
            resend_api_url: lookup("RESEND_API_URL").unwrap_or(defaults.resend_api_url),
            from_address: lookup("CONTACT_FROM_ADDRESS").unwrap_or(defaults.from_address),
            to_address: lookup("CONTACT_TO_ADDRESS").unwrap_or(defaults.to_address),
            outbound_timeout_secs: parse_or_default(
                lookup,
                "OUTBOUND_TIMEOUT_SECS",
                defaults.outbound_timeout_secs,
            )?,
        })
    }

    /// Whether an email-sending credential is present
    pub fn has_email_credential(&self) -> bool {
        self.resend_api_key.is_some()
    }
}
