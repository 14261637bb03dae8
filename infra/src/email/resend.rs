//! Resend Email Service Implementation
//!
//! Sends notification mail through the Resend REST API
//! (`POST /emails`, bearer-token authentication).
//!
//! A send is attempted exactly once. A refusal from Resend is reported with
//! the provider's own error body so it can be surfaced to the caller.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use ep_core::domain::OutboundEmail;
use ep_core::services::contact::{EmailDeliveryError, EmailSenderTrait};
use ep_shared::config::contact::ContactConfig;

/// Resend configuration
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// API key; absent means delivery is not configured
    pub api_key: Option<String>,
    /// API base URL
    pub api_url: String,
}

impl From<&ContactConfig> for ResendConfig {
    fn from(config: &ContactConfig) -> Self {
        Self {
            api_key: config.resend_api_key.clone(),
            api_url: config.resend_api_url.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

/// Resend email sender
pub struct ResendEmailSender {
    client: reqwest::Client,
    config: ResendConfig,
}

impl ResendEmailSender {
    /// Create a new sender on a shared HTTP client
    pub fn new(client: reqwest::Client, config: ResendConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.config.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl EmailSenderTrait for ResendEmailSender {
    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn provider_name(&self) -> &str {
        "resend"
    }

    async fn send_email(&self, email: &OutboundEmail) -> Result<String, EmailDeliveryError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| EmailDeliveryError::Transport("Resend API key is not configured".to_string()))?;

        let request = SendEmailRequest {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            html: &email.html,
            text: &email.text,
            reply_to: email.reply_to.as_deref(),
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| EmailDeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| EmailDeliveryError::Transport(e.to_string()))?;

        if status.is_success() {
            let sent: SendEmailResponse = serde_json::from_str(&body).map_err(|e| {
                EmailDeliveryError::Transport(format!("Unexpected Resend response: {}", e))
            })?;
            info!(email_id = %sent.id, "Resend accepted message");
            return Ok(sent.id);
        }

        let detail = serde_json::from_str::<serde_json::Value>(&body).unwrap_or_else(|_| {
            serde_json::json!({
                "statusCode": status.as_u16(),
                "message": body,
            })
        });

        error!(status = status.as_u16(), detail = %detail, "Resend rejected message");
        Err(EmailDeliveryError::Provider(detail))
    }
}
