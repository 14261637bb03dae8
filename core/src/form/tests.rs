//! Unit tests for the form controller

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ep_shared::types::ContactPayload;

use super::controller::{FAILURE_HINT, FAILURE_MESSAGE, SUCCESS_MESSAGE};
use super::*;

// Mock transport returning a fixed status, or a network failure
struct MockContactClient {
    response: Result<u16, String>,
    requests: Mutex<Vec<ContactPayload>>,
}

impl MockContactClient {
    fn new(response: Result<u16, String>) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ContactClientTrait for MockContactClient {
    async fn post_contact(&self, payload: &ContactPayload) -> Result<u16, String> {
        self.requests.lock().unwrap().push(payload.clone());
        self.response.clone()
    }
}

#[derive(Default)]
struct MockWidget {
    resets: AtomicUsize,
}

impl CaptchaWidget for MockWidget {
    fn reset(&self) {
        self.resets.fetch_add(1, Ordering::SeqCst);
    }
}

fn controller(response: Result<u16, String>) -> (FormController, Arc<MockContactClient>, Arc<MockWidget>) {
    let client = Arc::new(MockContactClient::new(response));
    let widget = Arc::new(MockWidget::default());
    let controller = FormController::new(client.clone(), widget.clone());
    (controller, client, widget)
}

fn fill(controller: &FormController) {
    controller.update_field(FormField::FirstName, "Jane");
    controller.update_field(FormField::LastName, "Doe");
    controller.update_field(FormField::Email, "jane@example.com");
    controller.update_field(FormField::Message, "Hello\nWorld");
}

#[test]
fn test_initial_state_is_empty() {
    let (controller, _, _) = controller(Ok(200));
    assert_eq!(controller.state(), FormState::default());
    assert!(!controller.can_submit());
    assert!(controller.status_message().is_none());
}

#[test]
fn test_field_names_parse() {
    assert_eq!("firstName".parse::<FormField>(), Ok(FormField::FirstName));
    assert_eq!("message".parse::<FormField>(), Ok(FormField::Message));
    assert!("phone".parse::<FormField>().is_err());
}

#[test]
fn test_update_field_sets_one_field() {
    let (controller, _, _) = controller(Ok(200));
    controller.update_field(FormField::Email, "jane@example.com");

    let state = controller.state();
    assert_eq!(state.field(FormField::Email), "jane@example.com");
    assert_eq!(state.field(FormField::FirstName), "");
}

#[test]
fn test_widget_callback_stores_and_expires_token() {
    let (controller, _, _) = controller(Ok(200));
    let callback = controller.verification_callback();

    callback.verified("tok123");
    assert_eq!(controller.state().captcha_token.as_deref(), Some("tok123"));
    assert!(controller.can_submit());

    callback.expired();
    assert!(controller.state().captcha_token.is_none());
    assert!(!controller.can_submit());
}

#[tokio::test]
async fn test_submit_without_token_makes_no_request() {
    let (mut controller, client, widget) = controller(Ok(200));
    fill(&controller);

    let outcome = controller.submit().await;

    assert_eq!(outcome, FormOutcome::MissingVerification);
    assert_eq!(client.request_count(), 0);
    assert_eq!(widget.resets.load(Ordering::SeqCst), 0);

    let state = controller.state();
    assert_eq!(state.status, Some(SubmitStatus::Error));
    assert!(!state.is_submitting);
    // Fields survive so the user can try again
    assert_eq!(state.first_name, "Jane");
}

#[tokio::test]
async fn test_successful_submit_clears_form_and_resets_widget() {
    let (mut controller, client, widget) = controller(Ok(200));
    fill(&controller);
    controller.on_verified("tok123");

    let outcome = controller.submit().await;

    assert_eq!(outcome, FormOutcome::Sent);
    assert_eq!(client.request_count(), 1);

    let sent = client.requests.lock().unwrap()[0].clone();
    assert_eq!(
        sent,
        ContactPayload {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello\nWorld".to_string(),
            captcha_token: "tok123".to_string(),
        }
    );

    let state = controller.state();
    assert!(state.first_name.is_empty());
    assert!(state.last_name.is_empty());
    assert!(state.email.is_empty());
    assert!(state.message.is_empty());
    assert!(state.captcha_token.is_none());
    assert!(!state.is_submitting);
    assert_eq!(state.status, Some(SubmitStatus::Success));
    assert_eq!(widget.resets.load(Ordering::SeqCst), 1);
    assert_eq!(controller.status_message(), Some((SUCCESS_MESSAGE, None)));
}

#[tokio::test]
async fn test_error_status_keeps_form_and_token() {
    let (mut controller, client, widget) = controller(Ok(500));
    fill(&controller);
    controller.on_verified("tok123");

    let outcome = controller.submit().await;

    assert_eq!(outcome, FormOutcome::Failed);
    assert_eq!(client.request_count(), 1);
    assert_eq!(widget.resets.load(Ordering::SeqCst), 0);

    let state = controller.state();
    assert_eq!(state.status, Some(SubmitStatus::Error));
    assert_eq!(state.message, "Hello\nWorld");
    assert_eq!(state.captcha_token.as_deref(), Some("tok123"));
    assert_eq!(
        controller.status_message(),
        Some((FAILURE_MESSAGE, Some(FAILURE_HINT)))
    );
}

#[tokio::test]
async fn test_network_failure_is_reported_like_any_error() {
    let (mut controller, _, _) = controller(Err("connection refused".to_string()));
    fill(&controller);
    controller.on_verified("tok123");

    assert_eq!(controller.submit().await, FormOutcome::Failed);
    assert_eq!(controller.state().status, Some(SubmitStatus::Error));
}

#[tokio::test]
async fn test_stale_token_cannot_be_reused_after_success() {
    let (mut controller, client, _) = controller(Ok(200));
    fill(&controller);
    controller.on_verified("tok123");
    assert_eq!(controller.submit().await, FormOutcome::Sent);

    fill(&controller);
    assert_eq!(controller.submit().await, FormOutcome::MissingVerification);
    assert_eq!(client.request_count(), 1);
}

#[tokio::test]
async fn test_resubmission_with_fresh_token_sends_again() {
    let (mut controller, client, _) = controller(Ok(200));

    for token in ["tok-a", "tok-b"] {
        fill(&controller);
        controller.on_verified(token);
        assert_eq!(controller.submit().await, FormOutcome::Sent);
    }

    assert_eq!(client.request_count(), 2);
}
