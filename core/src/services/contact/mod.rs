//! Contact relay service for the site's contact form
//!
//! This module provides the server side of the contact flow:
//! - Verifying the client's one-time captcha token
//! - Refusing to send when no email credential is configured
//! - Composing the owner notification and handing it to an email provider
//!
//! Each step short-circuits; there are no retries and no state is kept
//! between submissions.

mod config;
mod service;
mod traits;
mod types;


pub use crate::errors::EmailDeliveryError;
pub use config::ContactServiceConfig;
pub use service::ContactService;
pub use traits::{CaptchaVerifierTrait, EmailSenderTrait};
pub use types::CaptchaVerification;
