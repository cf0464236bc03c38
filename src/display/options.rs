//! Option set display formatting

use crate::models::{options, Field};

/// Format the option set of one selection field
///
/// Returns `None` for free-text fields.
pub fn format_field_options(field: Field) -> Option<String> {
    let choices = field.options()?;

    let value_width = choices.iter().map(|c| c.value.len()).max().unwrap_or(0);

    let mut output = format!("{} ({})\n", field.label(), field.name());
    for choice in choices {
        output.push_str(&format!(
            "  {:<width$}  {}\n",
            choice.value,
            choice.label,
            width = value_width
        ));
    }

    let limit = match field {
        Field::CheckinDate => Some(format!(
            "  Check-in on {} must be at or after 12:00 PM\n",
            options::EARLY_CHECKIN_DATE
        )),
        Field::CheckoutDate => Some(format!(
            "  Check-out on {} must be at or before 11:00 AM\n",
            options::LATE_CHECKOUT_DATE
        )),
        _ => None,
    };
    if let Some(limit) = limit {
        output.push_str(&limit);
    }

    Some(output)
}

/// Format every selection field's option set
pub fn format_all_options() -> String {
    Field::ALL
        .iter()
        .filter_map(|&field| format_field_options(field))
        .collect::<Vec<_>>()
        .join("\n")
}
