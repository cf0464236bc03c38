//! Service layer
//!
//! Business logic on top of the storage layer.

pub mod submission;

pub use submission::SubmissionService;
