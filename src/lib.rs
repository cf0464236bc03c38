//! ESTIC 2025 registration wizard
//!
//! This library provides a five-step registration form for the ESTIC 2025
//! conference, driven from the terminal. The wizard logic is independent of
//! the front-end; the TUI and CLI are thin layers over it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Registration record, fields, steps and option lists
//! - `wizard`: Step controller, validation rules and the time picker
//! - `storage`: JSON file storage for submitted registrations
//! - `services`: Submission hand-off
//! - `audit`: Audit logging system
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting for CLI output
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use estic::models::Field;
//! use estic::wizard::{AdvanceOutcome, WizardController};
//!
//! let mut wizard = WizardController::new();
//! wizard.update_field(Field::FirstName, "Meera");
//! assert_eq!(wizard.advance(), AdvanceOutcome::Blocked);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;
pub mod wizard;

pub use error::{EsticError, EsticResult};
