//! Configuration for the contact relay service

use ep_shared::config::contact::{ContactConfig, DEFAULT_FROM_ADDRESS, DEFAULT_TO_ADDRESS};

/// Configuration for the contact relay service
#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Sender address of notification mail
    pub from_address: String,
    /// The single fixed recipient of notification mail
    pub to_address: String,
}

impl Default for ContactServiceConfig {
    fn default() -> Self {
        Self {
            from_address: DEFAULT_FROM_ADDRESS.to_string(),
            to_address: DEFAULT_TO_ADDRESS.to_string(),
        }
    }
}

impl From<&ContactConfig> for ContactServiceConfig {
    fn from(config: &ContactConfig) -> Self {
        Self {
            from_address: config.from_address.clone(),
            to_address: config.to_address.clone(),
        }
    }
}
