//! Conversion of relay outcomes and request failures into HTTP responses.
//!
//! Every failure leaves the server as a JSON body; nothing surfaces as a raw
//! protocol-level error.

use std::collections::BTreeMap;

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{http::StatusCode, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use ep_core::domain::SubmissionOutcome;
use ep_shared::types::{wire_field_name, ContactSuccessResponse, ErrorResponse};

pub const CAPTCHA_FAILED: &str = "Captcha verification failed";
pub const EMAIL_NOT_CONFIGURED: &str = "Email service not configured";
pub const EMAIL_FAILED: &str = "Failed to send email";
pub const MESSAGE_FAILED: &str = "Failed to send message";
pub const INVALID_SUBMISSION: &str = "Invalid submission";

/// Map a relay outcome to its status code and JSON body
pub fn outcome_response(outcome: &SubmissionOutcome) -> HttpResponse {
    let status = StatusCode::from_u16(outcome.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    match outcome {
        SubmissionOutcome::Success { email_id } => {
            HttpResponse::build(status).json(ContactSuccessResponse::new(email_id.clone()))
        }
        SubmissionOutcome::VerificationFailed { .. } => {
            HttpResponse::build(status).json(ErrorResponse::new(CAPTCHA_FAILED))
        }
        SubmissionOutcome::ConfigMissing { provider } => HttpResponse::build(status).json(
            ErrorResponse::new(EMAIL_NOT_CONFIGURED)
                .with_details(serde_json::json!(format!("No credential configured for {}", provider))),
        ),
        SubmissionOutcome::DeliveryFailed { detail } => {
            HttpResponse::build(status).json(ErrorResponse::new(EMAIL_FAILED).with_details(detail.clone()))
        }
        SubmissionOutcome::UnexpectedFault { message } => HttpResponse::build(status)
            .json(ErrorResponse::new(MESSAGE_FAILED).with_details(serde_json::json!(message))),
    }
}

/// 400 response naming every offending field by its wire name
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut fields = BTreeMap::new();

    for (field, errors) in errors.field_errors() {
        let messages: Vec<String> = errors
            .iter()
            .map(|e| e.message.as_ref().map(|m| m.to_string()).unwrap_or_else(|| e.code.to_string()))
            .collect();
        fields.insert(wire_field_name(&field), messages);
    }

    HttpResponse::BadRequest().json(ErrorResponse::new(INVALID_SUBMISSION).with_fields(fields))
}

/// Error handler for `web::JsonConfig`.
///
/// A body that cannot be read as a submission is an unexpected fault, so it
/// gets the same 500 response as any other fault.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Unreadable request body for {} {}: {}", req.method(), req.path(), err);

    let outcome = SubmissionOutcome::UnexpectedFault {
        message: err.to_string(),
    };
    let response = outcome_response(&outcome);
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use validator::Validate;

    use ep_shared::types::ContactPayload;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_success_body() {
        let response = outcome_response(&SubmissionOutcome::Success {
            email_id: "em_1".to_string(),
        });
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "success": true,
                "message": "Email sent successfully",
                "emailId": "em_1"
            })
        );
    }

    #[actix_web::test]
    async fn test_verification_failure_has_no_details() {
        let response = outcome_response(&SubmissionOutcome::VerificationFailed {
            error_codes: vec!["invalid-input-response".to_string()],
        });
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, serde_json::json!({ "error": CAPTCHA_FAILED }));
    }

    #[actix_web::test]
    async fn test_delivery_failure_carries_provider_detail() {
        let detail = serde_json::json!({ "name": "validation_error", "message": "Invalid `to` field." });
        let response = outcome_response(&SubmissionOutcome::DeliveryFailed { detail: detail.clone() });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": EMAIL_FAILED, "details": detail })
        );
    }

    #[actix_web::test]
    async fn test_validation_fields_use_wire_names() {
        let payload = ContactPayload {
            first_name: "Jane".to_string(),
            email: "not-an-email".to_string(),
            message: "Hi".to_string(),
            ..Default::default()
        };
        let errors = payload.validate().unwrap_err();

        let response = validation_error_response(&errors);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], INVALID_SUBMISSION);
        let fields = body["fields"].as_object().unwrap();
        let mut names: Vec<&str> = fields.keys().map(String::as_str).collect();
        names.sort();
        assert_eq!(names, vec!["captchaToken", "email", "lastName"]);
    }
}
