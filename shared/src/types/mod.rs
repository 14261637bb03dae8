//! Common type definitions shared across modules

pub mod contact;

pub use contact::{wire_field_name, ContactPayload, ContactSuccessResponse, ErrorResponse};
