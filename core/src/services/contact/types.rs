//! Types for contact relay results

use serde::{Deserialize, Deserializer, Serialize};

/// Verdict returned by a captcha provider.
///
/// Field names follow reCAPTCHA's siteverify response. Only `success` is
/// acted on; the rest is kept for logging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptchaVerification {
    /// Whether the token was valid for this site. Anything other than a
    /// literal `true` on the wire, including a missing flag, reads as false.
    #[serde(default, deserialize_with = "deserialize_success")]
    pub success: bool,

    /// Timestamp of the challenge load (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_ts: Option<String>,

    /// Hostname of the site where the challenge was solved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// Provider error codes, if any
    #[serde(rename = "error-codes", default)]
    pub error_codes: Vec<String>,

    /// Score for score-based (v3) keys
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Action name for score-based (v3) keys
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl CaptchaVerification {
    pub fn passed() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }

    pub fn rejected(error_codes: Vec<String>) -> Self {
        Self {
            success: false,
            error_codes,
            ..Default::default()
        }
    }
}

fn deserialize_success<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value == serde_json::Value::Bool(true))
}
