//! Configuration module
//!
//! - Path resolution with an environment override
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::EsticPaths;
pub use settings::{ExportFormat, Settings};
