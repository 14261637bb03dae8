//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{parse_or_default, ConfigError, Environment, Lookup};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0,
            max_payload_size: default_max_payload_size(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Load from `SERVER_HOST`, `SERVER_PORT`, `SERVER_WORKERS` and `MAX_PAYLOAD_SIZE`
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: lookup("SERVER_HOST").unwrap_or(defaults.host),
            port: parse_or_default(lookup, "SERVER_PORT", defaults.port)?,
            workers: parse_or_default(lookup, "SERVER_WORKERS", defaults.workers)?,
            max_payload_size: parse_or_default(lookup, "MAX_PAYLOAD_SIZE", defaults.max_payload_size)?,
        })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allow any origin (development only)
    #[serde(default)]
    pub allow_any_origin: bool,

    /// Allowed origins
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_any_origin: false,
            allowed_origins: vec![],
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Create a permissive CORS configuration for development
    pub fn development() -> Self {
        Self {
            allow_any_origin: true,
            ..Default::default()
        }
    }

    /// Load from `ALLOWED_ORIGINS` (comma separated) and `CORS_MAX_AGE`.
    ///
    /// Outside production the site is usually served from a dev server on a
    /// different port, so any origin is accepted there.
    pub fn from_lookup(lookup: Lookup<'_>, environment: Environment) -> Result<Self, ConfigError> {
        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            allow_any_origin: !environment.is_production(),
            allowed_origins,
            max_age: parse_or_default(lookup, "CORS_MAX_AGE", default_max_age())?,
        })
    }
}

fn default_max_payload_size() -> usize {
    64 * 1024
}

fn default_max_age() -> usize {
    3600
}
