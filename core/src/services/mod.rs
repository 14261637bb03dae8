//! Business services.

pub mod contact;

// Re-export commonly used types
pub use contact::{
    CaptchaVerification, CaptchaVerifierTrait, ContactService, ContactServiceConfig,
    EmailDeliveryError, EmailSenderTrait,
};
