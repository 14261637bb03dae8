//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `contact` - Captcha and email provider credentials and addresses
//! - `environment` - Environment detection
//! - `server` - HTTP server and CORS configuration
//!
//! Every loader reads through a [`Lookup`] so tests can feed values without
//! touching the process environment. Empty values count as unset.

pub mod contact;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

// Re-export commonly used types
pub use contact::{CaptchaProvider, ContactConfig, EmailProvider};
pub use environment::Environment;
pub use server::{CorsConfig, ServerConfig};

/// Key lookup used by every configuration loader
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Invalid configuration value
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Read a process environment variable, treating blank values as unset
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub(crate) fn parse_or_default<T: FromStr>(
    lookup: Lookup<'_>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Contact relay configuration
    pub contact: ContactConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            cors: CorsConfig::development(),
            contact: ContactConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&process_env)
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        let environment = Environment::from_lookup(lookup);
        Ok(Self {
            environment,
            server: ServerConfig::from_lookup(lookup)?,
            cors: CorsConfig::from_lookup(lookup, environment)?,
            contact: ContactConfig::from_lookup(lookup)?,
        })
    }
}
