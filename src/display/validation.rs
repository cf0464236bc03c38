//! Validation report formatting

use crate::models::Step;
use crate::wizard::ErrorSet;

/// Format per-step validation results
///
/// Steps without errors are reported as OK.
pub fn format_validation_report(results: &[(Step, ErrorSet)]) -> String {
    let mut output = String::new();

    for (step, errors) in results {
        if errors.is_empty() {
            output.push_str(&format!("{}  OK\n", step));
            continue;
        }

        output.push_str(&format!("{}  {} error(s)\n", step, errors.len()));
        for (field, message) in errors.iter() {
            output.push_str(&format!("  {} ({}): {}\n", field.label(), field.name(), message));
        }
    }

    let total: usize = results.iter().map(|(_, errors)| errors.len()).sum();
    if total == 0 {
        output.push_str("\nRecord is valid.\n");
    } else {
        output.push_str(&format!("\n{} field(s) need attention.\n", total));
    }

    output
}
