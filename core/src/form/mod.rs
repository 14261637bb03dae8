//! Contact form controller
//!
//! Client-side half of the contact flow: holds the four text fields, the
//! verification token handed over by the captcha widget, and the transient
//! submission status shown under the form.
//!
//! The widget and the submission transport are injected at construction;
//! the widget reports tokens through a [`VerificationCallback`] instead of a
//! globally registered function.

mod controller;
mod state;
mod traits;

#[cfg(test)]
mod tests;

pub use controller::{FormController, VerificationCallback};
pub use state::{FormField, FormOutcome, FormState, SubmitStatus};
pub use traits::{CaptchaWidget, ContactClientTrait};
