//! Offline validation of a registration record file

use std::path::Path;

use crate::display::format_validation_report;
use crate::error::{EsticError, EsticResult};
use crate::models::{RegistrationRecord, Step};
use crate::wizard::validation;

/// Load a record from JSON, or YAML when the extension says so
pub fn load_record(path: &Path) -> EsticResult<RegistrationRecord> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| EsticError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let parse_error = |e: &dyn std::fmt::Display| {
        EsticError::Parse(format!("Failed to parse {}: {}", path.display(), e))
    };

    if is_yaml {
        serde_yaml::from_str(&contents).map_err(|e| parse_error(&e))
    } else {
        serde_json::from_str(&contents).map_err(|e| parse_error(&e))
    }
}

/// Validate one step (1-5) or every step of a record file
///
/// Prints a per-step report; returns an error when any field fails.
pub fn handle_validate_command(file: &Path, step: Option<u8>) -> EsticResult<()> {
    let record = load_record(file)?;

    let steps: Vec<Step> = match step {
        Some(number) => vec![Step::from_number(number).ok_or_else(|| {
            EsticError::Validation(format!(
                "Invalid step: {}. Steps are numbered 1 to {}",
                number,
                Step::COUNT
            ))
        })?],
        None => Step::ALL.to_vec(),
    };

    let results: Vec<_> = steps
        .into_iter()
        .map(|step| (step, validation::validate_step(&record, step)))
        .collect();

    print!("{}", format_validation_report(&results));

    let failed: usize = results.iter().map(|(_, errors)| errors.len()).sum();
    if failed > 0 {
        return Err(EsticError::Validation(format!(
            "{} field(s) failed validation",
            failed
        )));
    }

    Ok(())
}
