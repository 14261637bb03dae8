//! # Empowering Path Core
//!
//! Core business logic and domain layer for The Empowering Path backend.
//! This crate contains the domain entities, the contact relay service and its
//! provider traits, the contact form controller, and error types.

pub mod domain;
pub mod errors;
pub mod form;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
