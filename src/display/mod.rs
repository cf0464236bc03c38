//! Display formatting for terminal output
//!
//! Formats submissions, option sets and validation reports for CLI output.

pub mod options;
pub mod submission;
pub mod validation;

pub use options::{format_all_options, format_field_options};
pub use submission::{format_field_value, format_submission_details, format_submission_list};
pub use validation::format_validation_report;
