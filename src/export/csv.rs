//! CSV export
//!
//! Columns are the submission id and timestamp followed by every field's wire
//! name in form order. Selection fields are exported as their stored values.

use std::io::Write;

use crate::error::{EsticError, EsticResult};
use crate::models::Field;
use crate::storage::Storage;

/// Export all submissions to CSV
pub fn export_submissions_csv<W: Write>(storage: &Storage, writer: &mut W) -> EsticResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    let header = ["id", "submittedAt"]
        .into_iter()
        .chain(Field::ALL.iter().map(|field| field.name()));
    csv_writer
        .write_record(header)
        .map_err(|e| EsticError::Export(e.to_string()))?;

    for submission in storage.submissions.get_all()? {
        let id = submission.id.as_uuid().to_string();
        let submitted_at = submission.submitted_at.to_rfc3339();
        let row = [id.as_str(), submitted_at.as_str()]
            .into_iter()
            .chain(submission.record.iter().map(|(_, value)| value));

        csv_writer
            .write_record(row)
            .map_err(|e| EsticError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| EsticError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::EsticPaths;
    use crate::models::{RegistrationRecord, Submission};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = EsticPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_csv_header_only_when_empty() {
        let (_temp_dir, storage) = create_test_storage();
        let mut output = Vec::new();
        export_submissions_csv(&storage, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("id,submittedAt,prefix,firstName,middleName"));
        assert!(text.trim_end().ends_with("mealPreference"));
    }

    #[test]
    fn test_csv_quotes_commas() {
        let (_temp_dir, storage) = create_test_storage();
        let mut record = RegistrationRecord::new();
        record.set(Field::FirstName, "Anil");
        record.set(Field::AccommodationAddress, "4 MG Road, Pune");
        storage.submissions.upsert(Submission::new(record)).unwrap();

        let mut output = Vec::new();
        export_submissions_csv(&storage, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("\"4 MG Road, Pune\""));
        assert!(text.contains(",Anil,"));
    }
}
