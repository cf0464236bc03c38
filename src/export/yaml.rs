//! YAML export for human reading

use std::io::Write;

use crate::error::{EsticError, EsticResult};
use crate::export::json::SubmissionExport;
use crate::storage::Storage;

/// Export all submissions to YAML, preceded by a comment header
pub fn export_submissions_yaml<W: Write>(
    storage: &Storage,
    event_name: &str,
    writer: &mut W,
) -> EsticResult<()> {
    let export = SubmissionExport::from_storage(storage, event_name)?;

    let header = format!(
        "# {} Registrations Export\n# Generated: {}\n# App Version: {}\n#\n# Contains personal details of delegates. Handle with care.\n\n",
        export.event_name, export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| EsticError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| EsticError::Export(e.to_string()))?;

    Ok(())
}
