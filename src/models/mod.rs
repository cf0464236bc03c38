//! Core data models
//!
//! The registration domain: fields and the record that holds them, the wizard
//! steps, the fixed option sets, time-of-day values and stored submissions.

pub mod field;
pub mod ids;
pub mod options;
pub mod step;
pub mod submission;
pub mod time;

pub use field::{Field, FieldKind, RegistrationRecord};
pub use ids::SubmissionId;
pub use options::Choice;
pub use step::Step;
pub use submission::Submission;
pub use time::TimeOfDay;
