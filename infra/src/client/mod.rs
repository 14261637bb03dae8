//! Contact Endpoint Client Module
//!
//! Transport used by the contact form controller to reach `POST /api/contact`.

pub mod contact_client;

pub use contact_client::HttpContactClient;
