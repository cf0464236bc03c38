//! JSON export with schema versioning

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EsticError, EsticResult};
use crate::models::Submission;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full submission export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Event the registrations belong to
    pub event_name: String,

    pub submissions: Vec<Submission>,

    pub metadata: ExportMetadata,
}

/// Summary figures for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub submission_count: usize,

    /// Accommodation requested
    pub accommodation_count: usize,

    /// Transport requested
    pub transport_count: usize,

    pub earliest_submission: Option<DateTime<Utc>>,

    pub latest_submission: Option<DateTime<Utc>>,
}

impl SubmissionExport {
    /// Build an export from everything in storage
    pub fn from_storage(storage: &Storage, event_name: &str) -> EsticResult<Self> {
        let submissions = storage.submissions.get_all()?;

        let metadata = ExportMetadata {
            submission_count: submissions.len(),
            accommodation_count: submissions
                .iter()
                .filter(|s| s.record.require_accommodation == "yes")
                .count(),
            transport_count: submissions
                .iter()
                .filter(|s| s.record.require_transport == "yes")
                .count(),
            earliest_submission: submissions.first().map(|s| s.submitted_at),
            latest_submission: submissions.last().map(|s| s.submitted_at),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            event_name: event_name.to_string(),
            submissions,
            metadata,
        })
    }
}

/// Export all submissions to JSON
pub fn export_submissions_json<W: Write>(
    storage: &Storage,
    event_name: &str,
    writer: &mut W,
    pretty: bool,
) -> EsticResult<()> {
    let export = SubmissionExport::from_storage(storage, event_name)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| EsticError::Export(e.to_string()))?;

    Ok(())
}
