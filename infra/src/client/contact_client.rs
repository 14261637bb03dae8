//! HTTP transport for the contact form controller

use async_trait::async_trait;
use tracing::debug;

use ep_core::form::ContactClientTrait;
use ep_shared::types::ContactPayload;

/// Path of the contact relay endpoint
pub const CONTACT_PATH: &str = "/api/contact";

/// Posts form submissions to the site's contact endpoint
pub struct HttpContactClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactClient {
    /// Create a client for the site served at `base_url`
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactClientTrait for HttpContactClient {
    async fn post_contact(&self, payload: &ContactPayload) -> Result<u16, String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status().as_u16();
        debug!(status, endpoint = %self.endpoint, "Contact endpoint answered");
        Ok(status)
    }
}
