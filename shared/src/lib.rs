//! Shared utilities and common types for The Empowering Path server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Wire types for the contact endpoint
//! - Utility functions (log masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, ConfigError, ContactConfig, CorsConfig, Environment, ServerConfig};
pub use types::{ContactPayload, ContactSuccessResponse, ErrorResponse};
pub use utils::mask_email;
