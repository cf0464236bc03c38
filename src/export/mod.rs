//! Export of stored submissions
//!
//! - CSV: one row per submission, one column per field (spreadsheet-compatible)
//! - JSON: machine-readable export with metadata
//! - YAML: human-readable export with a header comment

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use crate::config::ExportFormat;
use crate::error::EsticResult;
use crate::storage::Storage;

pub use self::csv::export_submissions_csv;
pub use self::json::{export_submissions_json, SubmissionExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_submissions_yaml;

/// Export every stored submission in the given format
pub fn export_submissions<W: Write>(
    storage: &Storage,
    format: ExportFormat,
    event_name: &str,
    writer: &mut W,
) -> EsticResult<()> {
    match format {
        ExportFormat::Csv => export_submissions_csv(storage, writer),
        ExportFormat::Json => export_submissions_json(storage, event_name, writer, true),
        ExportFormat::Yaml => export_submissions_yaml(storage, event_name, writer),
    }
}
