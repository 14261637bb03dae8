//! Unit tests for contact error types

use crate::errors::{ContactError, EmailDeliveryError};

#[test]
fn test_error_messages() {
    assert_eq!(
        ContactError::VerificationFailed { error_codes: vec![] }.to_string(),
        "Captcha verification failed"
    );
    assert_eq!(
        ContactError::ConfigMissing { provider: "resend".into() }.to_string(),
        "Email service not configured"
    );
    assert_eq!(
        ContactError::UnexpectedFault { message: "timed out".into() }.to_string(),
        "Failed to send message: timed out"
    );
}

#[test]
fn test_provider_rejection_becomes_delivery_failure() {
    let detail = serde_json::json!({ "statusCode": 422, "message": "Invalid `to` field" });
    let error: ContactError = EmailDeliveryError::Provider(detail.clone()).into();

    match error {
        ContactError::DeliveryFailed { detail: got } => assert_eq!(got, detail),
        other => panic!("Expected delivery failure, got {:?}", other),
    }
}

#[test]
fn test_transport_error_becomes_unexpected_fault() {
    let error: ContactError = EmailDeliveryError::Transport("connection refused".into()).into();

    match error {
        ContactError::UnexpectedFault { message } => assert_eq!(message, "connection refused"),
        other => panic!("Expected unexpected fault, got {:?}", other),
    }
}
