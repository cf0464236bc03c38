//! Submission display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{options, Field, FieldKind, RegistrationRecord, Step, Submission, TimeOfDay};

#[derive(Tabled)]
struct SubmissionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Check-in")]
    checkin: String,
    #[tabled(rename = "Check-out")]
    checkout: String,
    #[tabled(rename = "Submitted")]
    submitted: String,
}

impl SubmissionRow {
    fn from_submission(submission: &Submission) -> Self {
        let record = &submission.record;
        Self {
            id: submission.id.to_string(),
            name: record.display_name(),
            email: record.email.clone(),
            checkin: travel_summary(record, Field::CheckinDate, Field::CheckinTime),
            checkout: travel_summary(record, Field::CheckoutDate, Field::CheckoutTime),
            submitted: submission.submitted_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

fn travel_summary(record: &RegistrationRecord, date: Field, time: Field) -> String {
    format!("{} {}", record.get(date), record.get(time))
        .trim()
        .to_string()
}

/// Format a list of submissions as a table
pub fn format_submission_list(submissions: &[Submission]) -> String {
    if submissions.is_empty() {
        return "No submissions found.".to_string();
    }

    let rows: Vec<SubmissionRow> = submissions.iter().map(SubmissionRow::from_submission).collect();
    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push_str(&format!("\n\n{} submission(s)\n", submissions.len()));
    output
}

/// A field's value as a person would read it
///
/// Selection values are shown by label and times in 12-hour form.
pub fn format_field_value(field: Field, value: &str) -> String {
    if value.is_empty() {
        return "-".to_string();
    }

    match field.kind() {
        FieldKind::Choice => options::label_for(field, value).unwrap_or(value).to_string(),
        FieldKind::Time => TimeOfDay::parse(value)
            .map(|time| time.format_12h())
            .unwrap_or_else(|| value.to_string()),
        _ => value.to_string(),
    }
}

/// Format a single submission, grouped by wizard step
pub fn format_submission_details(submission: &Submission) -> String {
    let record = &submission.record;
    let mut output = String::new();

    output.push_str(&format!("Registration: {}\n", record.display_name()));
    output.push_str(&format!("  ID:        {}\n", submission.id.as_uuid()));
    output.push_str(&format!(
        "  Submitted: {}\n",
        submission.submitted_at.format("%Y-%m-%d %H:%M UTC")
    ));

    let label_width = Field::ALL
        .iter()
        .map(|field| field.label().len())
        .max()
        .unwrap_or(0);

    for step in Step::ALL {
        output.push('\n');
        output.push_str(&format!("{}\n", step));
        for field in step.fields() {
            if !record.is_visible(field) {
                continue;
            }
            output.push_str(&format!(
                "  {:<width$}  {}\n",
                format!("{}:", field.label()),
                format_field_value(field, record.get(field)),
                width = label_width + 1,
            ));
        }
    }

    output
}
