//! Wire types for `POST /api/contact`
//!
//! Field names are camelCase on the wire to match the site's form payload.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Maximum accepted length of a first or last name
pub const MAX_NAME_LENGTH: u64 = 100;

/// Maximum accepted length of the free-text message
pub const MAX_MESSAGE_LENGTH: u64 = 5000;

/// Contact form submission body.
///
/// Missing keys deserialize as empty strings so validation can name every
/// absent field instead of failing on the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactPayload {
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_NAME_LENGTH, message = "is too long")
    )]
    pub first_name: String,

    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_NAME_LENGTH, message = "is too long")
    )]
    pub last_name: String,

    #[validate(custom(function = "not_blank"), email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_MESSAGE_LENGTH, message = "is too long")
    )]
    pub message: String,

    #[validate(custom(function = "not_blank"))]
    pub captcha_token: String,
}

/// Successful relay response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSuccessResponse {
    pub success: bool,
    pub message: String,
    pub email_id: String,
}

impl ContactSuccessResponse {
    pub fn new(email_id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: "Email sent successfully".to_string(),
            email_id: email_id.into(),
        }
    }
}

/// Error response body shared by every failure kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short, user-facing error text
    pub error: String,

    /// Provider or fault detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,

    /// Per-field validation messages, keyed by wire field name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            fields: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_fields(mut self, fields: BTreeMap<String, Vec<String>>) -> Self {
        self.fields = Some(fields);
        self
    }
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut error = validator::ValidationError::new("required");
        error.message = Some("is required".into());
        return Err(error);
    }
    Ok(())
}

/// Convert a snake_case struct field name to its camelCase wire name
pub fn wire_field_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
