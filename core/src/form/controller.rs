//! Form controller implementation

use std::sync::{Arc, Mutex, MutexGuard};

use super::state::{FormField, FormOutcome, FormState, SubmitStatus};
use super::traits::{CaptchaWidget, ContactClientTrait};

/// Headline shown after a successful submission
pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Headline shown after any failed submission
pub const FAILURE_MESSAGE: &str = "Failed to send message";

/// Hint shown under the failure headline
pub const FAILURE_HINT: &str = "Please try again or contact me directly via phone or email.";

fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Subscription handed to the captcha widget.
///
/// Cloneable and thread-safe; the widget calls [`verified`](Self::verified)
/// when a challenge is solved and [`expired`](Self::expired) when the token
/// lapses.
#[derive(Clone)]
pub struct VerificationCallback {
    state: Arc<Mutex<FormState>>,
}

impl VerificationCallback {
    pub fn verified(&self, token: impl Into<String>) {
        lock(&self.state).captcha_token = Some(token.into());
    }

    pub fn expired(&self) {
        lock(&self.state).captcha_token = None;
    }
}

/// Owns the contact form's state and drives a submission.
pub struct FormController {
    state: Arc<Mutex<FormState>>,
    client: Arc<dyn ContactClientTrait>,
    widget: Arc<dyn CaptchaWidget>,
}

impl FormController {
    /// Create a controller with empty fields, no token and no status
    pub fn new(client: Arc<dyn ContactClientTrait>, widget: Arc<dyn CaptchaWidget>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::default())),
            client,
            widget,
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> FormState {
        lock(&self.state).clone()
    }

    /// Set one field. Input widgets enforce their own constraints.
    pub fn update_field(&self, field: FormField, value: impl Into<String>) {
        lock(&self.state).set_field(field, value.into());
    }

    /// Subscription to register with the captcha widget
    pub fn verification_callback(&self) -> VerificationCallback {
        VerificationCallback {
            state: Arc::clone(&self.state),
        }
    }

    /// Store a token from the captcha widget
    pub fn on_verified(&self, token: impl Into<String>) {
        self.verification_callback().verified(token);
    }

    /// Drop an expired token
    pub fn on_expired(&self) {
        self.verification_callback().expired();
    }

    /// Submit is only offered with a token in hand and no request in flight
    pub fn can_submit(&self) -> bool {
        let state = lock(&self.state);
        !state.is_submitting && state.captcha_token.is_some()
    }

    /// Status lines to render under the form, if any
    pub fn status_message(&self) -> Option<(&'static str, Option<&'static str>)> {
        match lock(&self.state).status {
            Some(SubmitStatus::Success) => Some((SUCCESS_MESSAGE, None)),
            Some(SubmitStatus::Error) => Some((FAILURE_MESSAGE, Some(FAILURE_HINT))),
            None => None,
        }
    }

    /// Send the form.
    ///
    /// Exactly one request per call, or none when no token is held. On a
    /// success status the fields and token are cleared and the widget is
    /// reset. Every failure is reported to the user the same way. There is
    /// no retry and no deduplication.
    pub async fn submit(&mut self) -> FormOutcome {
        let payload = {
            let mut state = lock(&self.state);
            state.is_submitting = true;
            state.status = None;

            match state.captcha_token.clone() {
                Some(token) => state.payload(token),
                None => {
                    tracing::debug!("Contact form submitted without a verification token");
                    state.status = Some(SubmitStatus::Error);
                    state.is_submitting = false;
                    return FormOutcome::MissingVerification;
                }
            }
        };

        let outcome = match self.client.post_contact(&payload).await {
            Ok(status) if (200..300).contains(&status) => FormOutcome::Sent,
            Ok(status) => {
                tracing::warn!(status, "Contact endpoint returned an error status");
                FormOutcome::Failed
            }
            Err(error) => {
                tracing::warn!(error = %error, "Contact request failed");
                FormOutcome::Failed
            }
        };

        {
            let mut state = lock(&self.state);
            if outcome == FormOutcome::Sent {
                state.clear_fields();
                state.captcha_token = None;
                state.status = Some(SubmitStatus::Success);
            } else {
                state.status = Some(SubmitStatus::Error);
            }
            state.is_submitting = false;
        }

        if outcome == FormOutcome::Sent {
            self.widget.reset();
        }

        outcome
    }
}
