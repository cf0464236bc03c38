//! Option set listing

use crate::display::{format_all_options, format_field_options};
use crate::error::{EsticError, EsticResult};
use crate::models::Field;

/// Print the option set of one field (by wire name) or of every field
pub fn handle_options_command(field: Option<&str>) -> EsticResult<()> {
    match field {
        Some(name) => {
            let field = Field::parse(name).ok_or_else(|| {
                EsticError::Validation(format!("Unknown field: '{}'", name))
            })?;
            let output = format_field_options(field).ok_or_else(|| {
                EsticError::Validation(format!("{} is a free-text field", field.label()))
            })?;
            print!("{}", output);
        }
        None => print!("{}", format_all_options()),
    }

    Ok(())
}
