//! Domain entities representing core business objects.

pub mod contact_submission;
pub mod outbound_email;
pub mod submission_outcome;

// Re-export commonly used types
pub use contact_submission::ContactSubmission;
pub use outbound_email::OutboundEmail;
pub use submission_outcome::SubmissionOutcome;
