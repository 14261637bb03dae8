use std::any::Any;
use std::panic::AssertUnwindSafe;

use actix_web::{web, HttpRequest, HttpResponse};
use futures_util::FutureExt;
use validator::Validate;

use ep_core::domain::{ContactSubmission, SubmissionOutcome};
use ep_shared::{mask_email, ContactPayload};

use super::request::{extract_client_ip, extract_request_id};
use crate::app::AppState;
use crate::handlers::{outcome_response, validation_error_response};

/// Handler for POST /api/contact
///
/// Validates the submission, then verifies the captcha token and relays the
/// message to the site owner.
///
/// # Request Body
///
/// ```json
/// {
///     "firstName": "Jane",
///     "lastName": "Doe",
///     "email": "jane@example.com",
///     "message": "Hello",
///     "captchaToken": "03AFcWeA..."
/// }
/// ```
///
/// # Responses
///
/// - `200` `{ "success": true, "message": "Email sent successfully", "emailId": "..." }`
/// - `400` `{ "error": "Invalid submission", "fields": { ... } }`
/// - `400` `{ "error": "Captcha verification failed" }`
/// - `500` `{ "error": "...", "details": ... }` for configuration, delivery and unexpected faults
pub async fn submit_contact(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<ContactPayload>,
) -> HttpResponse {
    let request_id = extract_request_id(&req);
    let client_ip = extract_client_ip(&req);
    let payload = payload.into_inner();

    log::info!(
        "[{}] Contact submission from {}, ip: {}",
        request_id,
        mask_email(&payload.email),
        client_ip.as_deref().unwrap_or("unknown")
    );

    if let Err(errors) = payload.validate() {
        log::warn!("[{}] Invalid contact submission: {}", request_id, errors);
        return with_request_id(validation_error_response(&errors), &request_id);
    }

    let submission = ContactSubmission::from(payload);
    let outcome = AssertUnwindSafe(state.contact_service.submit(&submission, client_ip.as_deref()))
        .catch_unwind()
        .await
        .unwrap_or_else(|panic| {
            let message = panic_message(&*panic);
            log::error!("[{}] Contact relay panicked: {}", request_id, message);
            SubmissionOutcome::UnexpectedFault { message }
        });

    log::info!(
        "[{}] Contact submission finished: {} ({})",
        request_id,
        outcome.kind(),
        outcome.status_code()
    );

    with_request_id(outcome_response(&outcome), &request_id)
}

fn with_request_id(mut response: HttpResponse, request_id: &str) -> HttpResponse {
    if let Ok(value) = actix_web::http::header::HeaderValue::from_str(request_id) {
        response.headers_mut().insert(
            actix_web::http::header::HeaderName::from_static("x-request-id"),
            value,
        );
    }
    response
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "Unexpected error while handling the submission".to_string()
    }
}
