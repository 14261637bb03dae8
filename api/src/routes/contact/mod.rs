//! Contact form routes
//!
//! This module contains the contact relay endpoint:
//! - Request validation
//! - Captcha verification and email dispatch through the contact service
//! - Fault containment

pub mod request;
pub mod submit;

pub use request::{extract_client_ip, extract_request_id};
pub use submit::submit_contact;
