//! Audit logging
//!
//! Submission create and delete operations are recorded with a snapshot of the
//! record in an append-only, line-delimited JSON file (`audit.log`).
//!
//! ```rust,ignore
//! use estic::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(
//!     EntityType::Submission,
//!     submission.id.to_string(),
//!     Some(submission.record.display_name()),
//!     &submission.record,
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
