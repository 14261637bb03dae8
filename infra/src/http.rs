//! Outbound HTTP client construction

use std::time::Duration;

use ep_shared::config::ContactConfig;

use crate::InfrastructureError;

const USER_AGENT: &str = concat!("empowering-path/", env!("CARGO_PKG_VERSION"));

/// Build the client shared by every outbound provider call.
///
/// The timeout bounds each request end to end, so a stalled provider turns
/// into a transport error instead of a hung submission.
pub fn build_http_client(config: &ContactConfig) -> Result<reqwest::Client, InfrastructureError> {
    if config.outbound_timeout_secs == 0 {
        return Err(InfrastructureError::Config(
            "OUTBOUND_TIMEOUT_SECS must be greater than zero".to_string(),
        ));
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.outbound_timeout_secs))
        .user_agent(USER_AGENT)
        .build()?;

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client(&ContactConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let config = ContactConfig {
            outbound_timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            build_http_client(&config),
            Err(InfrastructureError::Config(_))
        ));
    }
}
