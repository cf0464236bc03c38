//! Step validation rules
//!
//! Each step's fields are checked independently; every failing field gets a
//! message, there is no early exit. Optional fields and conditional fields
//! whose governing flag does not hold the triggering value are skipped.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::{options, Field, FieldKind, RegistrationRecord, Step, TimeOfDay};

use super::errors::ErrorSet;
use super::time_picker::TimeBounds;

pub const INVALID_EMAIL: &str = "Invalid email format";
pub const INVALID_CHOICE: &str = "Please choose one of the listed options";
pub const INVALID_DATE: &str = "Invalid date. Use YYYY-MM-DD";
pub const INVALID_TIME: &str = "Invalid time. Use HH:MM (24-hour)";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
}

/// Minimal shape check: something@something.something, no whitespace runs
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Message shown when a required field is left empty
pub fn required_message(field: Field) -> &'static str {
    match field {
        Field::Prefix => "Prefix is required",
        Field::FirstName => "First name is required",
        Field::LastName => "Last name is required",
        Field::DateOfBirth => "Date of birth is required",
        Field::Gender => "Gender is required",
        Field::Email => "Email is required",
        Field::Mobile => "Mobile number is required",
        Field::WhatsappMobile => "WhatsApp number is required",
        Field::Designation => "Designation is required",
        Field::CpcLevel => "7th CPC Level is required",
        Field::IdProofType => "ID proof type is required",
        Field::IdProofNumber => "ID proof number is required",
        Field::AttendInaugural => "Please select your attendance preference",
        Field::Day2Session1 | Field::Day2Session2 | Field::Day3Session1 | Field::Day3Session2 => {
            "Please select a session"
        }
        Field::CheckinCity => "Check-in city is required",
        Field::CheckinDate => "Check-in date is required",
        Field::CheckinTime => "Check-in time is required",
        Field::CheckoutCity => "Check-out city is required",
        Field::CheckoutDate => "Check-out date is required",
        Field::CheckoutTime => "Check-out time is required",
        Field::RequireTransport => "Please select transport preference",
        Field::RequireAccommodation => "Please select accommodation preference",
        Field::AccommodationAddress => "Accommodation address is required",
        Field::SpecialAssistance => "Please select special assistance preference",
        Field::AssistanceDetails => "Please specify the assistance required",
        Field::MealPreference => "Meal preference is required",
        Field::MiddleName => "Middle name is required",
        Field::AlternateEmail => "Alternate email is required",
        Field::AlternateMobile => "Alternate mobile number is required",
    }
}

/// Picker bounds for a time field, derived from the chosen travel dates
pub fn time_bounds(record: &RegistrationRecord, field: Field) -> TimeBounds {
    match field {
        Field::CheckinTime => TimeBounds {
            min: options::checkin_min_time(&record.checkin_date),
            max: None,
        },
        Field::CheckoutTime => TimeBounds {
            min: None,
            max: options::checkout_max_time(&record.checkout_date),
        },
        _ => TimeBounds::unbounded(),
    }
}

/// Check a single field, returning its message if it fails
pub fn validate_field(record: &RegistrationRecord, field: Field) -> Option<String> {
    if field.is_optional() || !record.is_visible(field) {
        return None;
    }

    let value = record.get(field);

    match field.kind() {
        FieldKind::Text => {
            if value.trim().is_empty() {
                return Some(required_message(field).to_string());
            }
        }
        FieldKind::Email => {
            if value.trim().is_empty() {
                return Some(required_message(field).to_string());
            }
            if !is_valid_email(value) {
                return Some(INVALID_EMAIL.to_string());
            }
        }
        FieldKind::Date => {
            if value.is_empty() {
                return Some(required_message(field).to_string());
            }
            if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
                return Some(INVALID_DATE.to_string());
            }
        }
        FieldKind::Choice => {
            if value.is_empty() {
                return Some(required_message(field).to_string());
            }
            if options::label_for(field, value).is_none() {
                return Some(INVALID_CHOICE.to_string());
            }
        }
        FieldKind::Time => {
            if value.is_empty() {
                return Some(required_message(field).to_string());
            }
            let Some(time) = TimeOfDay::parse(value) else {
                return Some(INVALID_TIME.to_string());
            };
            // The travel date may have changed after the time was picked
            if let Err(rejection) = time_bounds(record, field).check(time) {
                return Some(rejection.to_string());
            }
        }
    }

    None
}

/// Compute the full error set for one step
pub fn validate_step(record: &RegistrationRecord, step: Step) -> ErrorSet {
    let mut errors = ErrorSet::new();
    for field in step.fields() {
        if let Some(message) = validate_field(record, field) {
            errors.insert(field, message);
        }
    }
    errors
}

/// The first step that fails validation, with its errors
pub fn first_invalid_step(record: &RegistrationRecord) -> Option<(Step, ErrorSet)> {
    Step::ALL
        .iter()
        .map(|&step| (step, validate_step(record, step)))
        .find(|(_, errors)| !errors.is_empty())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A record that passes every step
    pub(crate) fn complete_record() -> RegistrationRecord {
        let mut record = RegistrationRecord::new();
        for (field, value) in [
            (Field::Prefix, "dr"),
            (Field::FirstName, "Meera"),
            (Field::LastName, "Iyer"),
            (Field::DateOfBirth, "1984-06-12"),
            (Field::Gender, "female"),
            (Field::Email, "meera.iyer@example.org"),
            (Field::Mobile, "9876543210"),
            (Field::WhatsappMobile, "9876543210"),
            (Field::Designation, "Scientist F"),
            (Field::CpcLevel, "13"),
            (Field::IdProofType, "passport"),
            (Field::IdProofNumber, "Z1234567"),
            (Field::AttendInaugural, "yes"),
            (Field::Day2Session1, "quantum"),
            (Field::Day2Session2, "ai"),
            (Field::Day3Session1, "space"),
            (Field::Day3Session2, "electronics"),
            (Field::CheckinCity, "Bengaluru"),
            (Field::CheckinDate, "02-nov"),
            (Field::CheckinTime, "14:30"),
            (Field::CheckoutCity, "Bengaluru"),
            (Field::CheckoutDate, "06-nov"),
            (Field::CheckoutTime, "10:00"),
            (Field::RequireTransport, "yes"),
            (Field::RequireAccommodation, "yes"),
            (Field::SpecialAssistance, "no"),
            (Field::MealPreference, "veg"),
        ] {
            record.set(field, value);
        }
        record
    }

    #[test]
    fn test_empty_record_fails_every_required_field() {
        let record = RegistrationRecord::new();
        let errors = validate_step(&record, Step::PersonalDetails);

        let expected = [
            Field::Prefix,
            Field::FirstName,
            Field::LastName,
            Field::DateOfBirth,
            Field::Gender,
            Field::Email,
            Field::Mobile,
            Field::WhatsappMobile,
            Field::Designation,
            Field::CpcLevel,
            Field::IdProofType,
            Field::IdProofNumber,
        ];
        assert_eq!(errors.fields().collect::<Vec<_>>(), expected.to_vec());
        assert_eq!(errors.get(Field::CpcLevel), Some("7th CPC Level is required"));
        assert!(!errors.contains(Field::MiddleName));
    }

    #[test]
    fn test_complete_record_passes_every_step() {
        let record = complete_record();
        for step in Step::ALL {
            assert!(validate_step(&record, step).is_empty(), "{} failed", step);
        }
        assert!(first_invalid_step(&record).is_none());
    }

    #[test]
    fn test_single_missing_field_reports_only_that_key() {
        let mut record = complete_record();
        record.set(Field::Day3Session1, "");

        let errors = validate_step(&record, Step::ProgramSchedule);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Day3Session1), Some("Please select a session"));
    }

    #[test]
    fn test_whitespace_only_text_is_empty() {
        let mut record = complete_record();
        record.set(Field::CheckinCity, "   ");

        let errors = validate_step(&record, Step::TravelDetails);
        assert_eq!(errors.get(Field::CheckinCity), Some("Check-in city is required"));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@example.co.in"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_email_required_takes_precedence_over_format() {
        let mut record = complete_record();

        record.set(Field::Email, "");
        let errors = validate_step(&record, Step::PersonalDetails);
        assert_eq!(errors.get(Field::Email), Some("Email is required"));

        record.set(Field::Email, "abc");
        let errors = validate_step(&record, Step::PersonalDetails);
        assert_eq!(errors.get(Field::Email), Some(INVALID_EMAIL));
    }

    #[test]
    fn test_accommodation_address_required_only_when_declined() {
        let mut record = complete_record();

        record.set(Field::RequireAccommodation, "yes");
        assert!(validate_step(&record, Step::Accommodation).is_empty());

        record.set(Field::RequireAccommodation, "no");
        let errors = validate_step(&record, Step::Accommodation);
        assert_eq!(
            errors.get(Field::AccommodationAddress),
            Some("Accommodation address is required")
        );

        record.set(Field::AccommodationAddress, "12 Lake View Road, Bengaluru");
        assert!(validate_step(&record, Step::Accommodation).is_empty());
    }

    #[test]
    fn test_assistance_details_required_only_when_requested() {
        let mut record = complete_record();

        record.set(Field::SpecialAssistance, "no");
        assert!(validate_step(&record, Step::Preferences).is_empty());

        record.set(Field::SpecialAssistance, "yes");
        let errors = validate_step(&record, Step::Preferences);
        assert_eq!(
            errors.get(Field::AssistanceDetails),
            Some("Please specify the assistance required")
        );
    }

    #[test]
    fn test_unknown_choice_value_rejected() {
        let mut record = complete_record();
        record.set(Field::MealPreference, "keto");

        let errors = validate_step(&record, Step::Preferences);
        assert_eq!(errors.get(Field::MealPreference), Some(INVALID_CHOICE));
    }

    #[test]
    fn test_stored_time_checked_against_date_limits() {
        let mut record = complete_record();
        record.set(Field::CheckinTime, "10:00");

        let errors = validate_step(&record, Step::TravelDetails);
        assert_eq!(
            errors.get(Field::CheckinTime),
            Some("Time must be after 12:00 PM")
        );

        // Moving the check-in date lifts the noon limit
        record.set(Field::CheckinDate, "03-nov");
        assert!(validate_step(&record, Step::TravelDetails).is_empty());
    }

    #[test]
    fn test_malformed_date_and_time() {
        let mut record = complete_record();
        record.set(Field::DateOfBirth, "12/06/1984");
        record.set(Field::CheckoutTime, "10am");

        assert_eq!(
            validate_step(&record, Step::PersonalDetails).get(Field::DateOfBirth),
            Some(INVALID_DATE)
        );
        assert_eq!(
            validate_step(&record, Step::TravelDetails).get(Field::CheckoutTime),
            Some(INVALID_TIME)
        );
    }

    #[test]
    fn test_first_invalid_step() {
        let mut record = complete_record();
        record.set(Field::CheckoutCity, "");
        record.set(Field::MealPreference, "");

        let (step, errors) = first_invalid_step(&record).unwrap();
        assert_eq!(step, Step::TravelDetails);
        assert!(errors.contains(Field::CheckoutCity));
        assert!(!errors.contains(Field::MealPreference));
    }
}
