//! Response mapping for the contact endpoint

pub mod response;

pub use response::{json_error_handler, outcome_response, validation_error_response};
