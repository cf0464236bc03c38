//! Registration fields
//!
//! Every input of the wizard is identified by a [`Field`]. The
//! [`RegistrationRecord`] is generated alongside it so the two can never
//! drift apart: each field has exactly one string slot in the record, and
//! its wire name is the record's serialized key.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::options::{self, Choice};
use super::step::Step;

/// How a field is edited and validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, validated on its trimmed value
    Text,
    /// Free text that must also look like an email address
    Email,
    /// Calendar date entered as `YYYY-MM-DD`
    Date,
    /// One value from a fixed option set
    Choice,
    /// Time of day chosen with the time picker
    Time,
}

/// Generates the `Field` enum and the `RegistrationRecord` struct from one list
macro_rules! registration_fields {
    ($( $variant:ident => $member:ident : $wire:literal ),+ $(,)?) => {
        /// Identifier of a single registration input
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Field {
            $( $variant, )+
        }

        impl Field {
            /// All fields in form order
            pub const ALL: &'static [Field] = &[ $( Field::$variant, )+ ];

            /// The field's wire name (the record's serialized key)
            pub fn name(self) -> &'static str {
                match self {
                    $( Field::$variant => $wire, )+
                }
            }

            /// Look a field up by its wire name
            pub fn parse(name: &str) -> Option<Self> {
                match name {
                    $( $wire => Some(Field::$variant), )+
                    _ => None,
                }
            }
        }

        /// The registration form's values, one string per field
        ///
        /// Unset values are empty strings. Selection fields hold the option
        /// value (e.g. `"mr"`), never its label.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct RegistrationRecord {
            $(
                #[serde(rename = $wire, default)]
                pub $member: String,
            )+
        }

        impl RegistrationRecord {
            /// Get the value of a field
            pub fn get(&self, field: Field) -> &str {
                match field {
                    $( Field::$variant => &self.$member, )+
                }
            }

            /// Set the value of a field
            pub fn set(&mut self, field: Field, value: impl Into<String>) {
                let value = value.into();
                match field {
                    $( Field::$variant => self.$member = value, )+
                }
            }
        }
    };
}

registration_fields! {
    Prefix => prefix: "prefix",
    FirstName => first_name: "firstName",
    MiddleName => middle_name: "middleName",
    LastName => last_name: "lastName",
    DateOfBirth => date_of_birth: "dateOfBirth",
    Gender => gender: "gender",
    Email => email: "email",
    AlternateEmail => alternate_email: "alternateEmail",
    Mobile => mobile: "mobile",
    AlternateMobile => alternate_mobile: "alternateMobile",
    WhatsappMobile => whatsapp_mobile: "whatsappMobile",
    Designation => designation: "designation",
    CpcLevel => cpc_level: "cpcLevel",
    IdProofType => id_proof_type: "idProofType",
    IdProofNumber => id_proof_number: "idProofNumber",
    AttendInaugural => attend_inaugural: "attendInaugural",
    Day2Session1 => day2_session1: "day2Session1",
    Day2Session2 => day2_session2: "day2Session2",
    Day3Session1 => day3_session1: "day3Session1",
    Day3Session2 => day3_session2: "day3Session2",
    CheckinCity => checkin_city: "checkinCity",
    CheckinDate => checkin_date: "checkinDate",
    CheckinTime => checkin_time: "checkinTime",
    CheckoutCity => checkout_city: "checkoutCity",
    CheckoutDate => checkout_date: "checkoutDate",
    CheckoutTime => checkout_time: "checkoutTime",
    RequireTransport => require_transport: "requireTransport",
    RequireAccommodation => require_accommodation: "requireAccommodation",
    AccommodationAddress => accommodation_address: "accommodationAddress",
    SpecialAssistance => special_assistance: "specialAssistance",
    AssistanceDetails => assistance_details: "assistanceDetails",
    MealPreference => meal_preference: "mealPreference",
}

impl Field {
    /// Human-readable label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Self::Prefix => "Prefix",
            Self::FirstName => "First Name",
            Self::MiddleName => "Middle Name",
            Self::LastName => "Last Name",
            Self::DateOfBirth => "Date of Birth",
            Self::Gender => "Gender",
            Self::Email => "Email",
            Self::AlternateEmail => "Alternate Email",
            Self::Mobile => "Mobile",
            Self::AlternateMobile => "Alternate Mobile",
            Self::WhatsappMobile => "WhatsApp Mobile",
            Self::Designation => "Designation",
            Self::CpcLevel => "7th CPC Level",
            Self::IdProofType => "ID Proof Type",
            Self::IdProofNumber => "ID Proof Number",
            Self::AttendInaugural => "Attend Inaugural (01 Nov)",
            Self::Day2Session1 => "Day 2 Session 1",
            Self::Day2Session2 => "Day 2 Session 2",
            Self::Day3Session1 => "Day 3 Session 1",
            Self::Day3Session2 => "Day 3 Session 2",
            Self::CheckinCity => "Check-in City",
            Self::CheckinDate => "Check-in Date",
            Self::CheckinTime => "Check-in Time",
            Self::CheckoutCity => "Check-out City",
            Self::CheckoutDate => "Check-out Date",
            Self::CheckoutTime => "Check-out Time",
            Self::RequireTransport => "Require Transport",
            Self::RequireAccommodation => "Require Accommodation",
            Self::AccommodationAddress => "Accommodation Address",
            Self::SpecialAssistance => "Special Assistance",
            Self::AssistanceDetails => "Assistance Details",
            Self::MealPreference => "Meal Preference",
        }
    }

    /// The wizard step this field belongs to
    pub fn step(self) -> Step {
        match self {
            Self::Prefix
            | Self::FirstName
            | Self::MiddleName
            | Self::LastName
            | Self::DateOfBirth
            | Self::Gender
            | Self::Email
            | Self::AlternateEmail
            | Self::Mobile
            | Self::AlternateMobile
            | Self::WhatsappMobile
            | Self::Designation
            | Self::CpcLevel
            | Self::IdProofType
            | Self::IdProofNumber => Step::PersonalDetails,
            Self::AttendInaugural
            | Self::Day2Session1
            | Self::Day2Session2
            | Self::Day3Session1
            | Self::Day3Session2 => Step::ProgramSchedule,
            Self::CheckinCity
            | Self::CheckinDate
            | Self::CheckinTime
            | Self::CheckoutCity
            | Self::CheckoutDate
            | Self::CheckoutTime
            | Self::RequireTransport => Step::TravelDetails,
            Self::RequireAccommodation | Self::AccommodationAddress => Step::Accommodation,
            Self::SpecialAssistance | Self::AssistanceDetails | Self::MealPreference => {
                Step::Preferences
            }
        }
    }

    /// How this field is edited
    pub fn kind(self) -> FieldKind {
        match self {
            Self::Email | Self::AlternateEmail => FieldKind::Email,
            Self::DateOfBirth => FieldKind::Date,
            Self::CheckinTime | Self::CheckoutTime => FieldKind::Time,
            field if field.options().is_some() => FieldKind::Choice,
            _ => FieldKind::Text,
        }
    }

    /// Fields that never take part in validation
    pub fn is_optional(self) -> bool {
        matches!(
            self,
            Self::MiddleName | Self::AlternateEmail | Self::AlternateMobile
        )
    }

    /// The governing flag and triggering value for conditionally shown fields
    ///
    /// The field is shown (and required) only while the governing field holds
    /// the triggering value.
    pub fn condition(self) -> Option<(Field, &'static str)> {
        match self {
            Self::AccommodationAddress => Some((Self::RequireAccommodation, options::NO)),
            Self::AssistanceDetails => Some((Self::SpecialAssistance, options::YES)),
            _ => None,
        }
    }

    /// The fixed option set for selection fields
    pub fn options(self) -> Option<&'static [Choice]> {
        options::options_for(self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl RegistrationRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over every field with its current value, in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.iter().map(move |&field| (field, self.get(field)))
    }

    /// Whether a conditionally shown field is currently visible
    pub fn is_visible(&self, field: Field) -> bool {
        match field.condition() {
            Some((governing, trigger)) => self.get(governing) == trigger,
            None => true,
        }
    }

    /// Display name built from prefix label and names
    pub fn display_name(&self) -> String {
        let prefix = options::label_for(Field::Prefix, &self.prefix).unwrap_or("");
        [prefix, &self.first_name, &self.middle_name, &self.last_name]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for &field in Field::ALL {
            assert_eq!(Field::parse(field.name()), Some(field));
        }
        assert_eq!(Field::parse("unknownField"), None);
    }

    #[test]
    fn test_field_count() {
        assert_eq!(Field::ALL.len(), 32);
    }

    #[test]
    fn test_record_get_set() {
        let mut record = RegistrationRecord::new();
        record.set(Field::FirstName, "Asha");
        record.set(Field::Day2Session1, "quantum");

        assert_eq!(record.get(Field::FirstName), "Asha");
        assert_eq!(record.first_name, "Asha");
        assert_eq!(record.get(Field::Day2Session1), "quantum");
        assert_eq!(record.get(Field::LastName), "");
    }

    #[test]
    fn test_record_serializes_with_wire_names() {
        let mut record = RegistrationRecord::new();
        record.set(Field::WhatsappMobile, "9876543210");
        record.set(Field::Day3Session2, "electronics");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["whatsappMobile"], "9876543210");
        assert_eq!(json["day3Session2"], "electronics");
    }

    #[test]
    fn test_record_deserializes_partial_input() {
        let record: RegistrationRecord =
            serde_json::from_str(r#"{"firstName": "Ravi", "checkinDate": "02-nov"}"#).unwrap();
        assert_eq!(record.first_name, "Ravi");
        assert_eq!(record.checkin_date, "02-nov");
        assert!(record.email.is_empty());
    }

    #[test]
    fn test_field_kinds() {
        assert_eq!(Field::FirstName.kind(), FieldKind::Text);
        assert_eq!(Field::Email.kind(), FieldKind::Email);
        assert_eq!(Field::DateOfBirth.kind(), FieldKind::Date);
        assert_eq!(Field::Prefix.kind(), FieldKind::Choice);
        assert_eq!(Field::RequireTransport.kind(), FieldKind::Choice);
        assert_eq!(Field::CheckoutTime.kind(), FieldKind::Time);
    }

    #[test]
    fn test_conditional_visibility() {
        let mut record = RegistrationRecord::new();
        assert!(!record.is_visible(Field::AccommodationAddress));

        record.set(Field::RequireAccommodation, "no");
        assert!(record.is_visible(Field::AccommodationAddress));

        record.set(Field::RequireAccommodation, "yes");
        assert!(!record.is_visible(Field::AccommodationAddress));

        record.set(Field::SpecialAssistance, "yes");
        assert!(record.is_visible(Field::AssistanceDetails));
        assert!(record.is_visible(Field::FirstName));
    }

    #[test]
    fn test_display_name() {
        let mut record = RegistrationRecord::new();
        record.set(Field::Prefix, "dr");
        record.set(Field::FirstName, "Meera");
        record.set(Field::LastName, "Iyer");
        assert_eq!(record.display_name(), "Dr. Meera Iyer");
    }
}
