//! Form state types

use ep_shared::types::ContactPayload;
use serde::{Deserialize, Serialize};

/// The four user-editable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Message,
}

impl std::str::FromStr for FormField {
    type Err = String;

    /// Parse an input's `name` attribute
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" => Ok(FormField::FirstName),
            "lastName" => Ok(FormField::LastName),
            "email" => Ok(FormField::Email),
            "message" => Ok(FormField::Message),
            _ => Err(format!("Unknown form field: {}", s)),
        }
    }
}

/// Last submission status shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    Success,
    Error,
}

/// What a single `submit` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// The endpoint answered with a success status
    Sent,
    /// No verification token was held; no request was made
    MissingVerification,
    /// The endpoint answered with an error status, or never answered
    Failed,
}

/// Everything the form renders from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub is_submitting: bool,
    pub status: Option<SubmitStatus>,
    pub captcha_token: Option<String>,
}

impl FormState {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub(crate) fn set_field(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub(crate) fn clear_fields(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub(crate) fn payload(&self, captcha_token: String) -> ContactPayload {
        ContactPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            captcha_token,
        }
    }
}
