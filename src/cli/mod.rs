//! CLI command handlers
//!
//! Bridges clap argument parsing with the service and display layers.

pub mod options;
pub mod submission;
pub mod validate;

pub use options::handle_options_command;
pub use submission::{handle_submission_command, SubmissionCommands};
pub use validate::handle_validate_command;
