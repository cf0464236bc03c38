//! Fixed option sets for selection fields
//!
//! Values are what the record stores; labels are what the user sees.

use super::field::Field;
use super::time::TimeOfDay;

/// A single selectable option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

pub const YES: &str = "yes";
pub const NO: &str = "no";

pub const PREFIXES: &[Choice] = &[
    choice("mr", "Mr."),
    choice("ms", "Ms."),
    choice("dr", "Dr."),
    choice("prof", "Prof."),
];

pub const GENDERS: &[Choice] = &[
    choice("male", "Male"),
    choice("female", "Female"),
    choice("other", "Other"),
];

pub const YES_NO: &[Choice] = &[choice(YES, "Yes"), choice(NO, "No")];

pub const ID_PROOF_TYPES: &[Choice] = &[
    choice("passport", "Passport"),
    choice("aadhaar", "Aadhaar Card"),
    choice("voter", "Voter ID"),
    choice("pan", "PAN Card"),
    choice("driving", "Driving License"),
];

pub const DAY2_SESSION1: &[Choice] = &[
    choice("quantum", "Quantum Science & Technology"),
    choice("bio-manufacturing", "Bio-Manufacturing"),
    choice("energy", "Energy, Environment & Climate"),
];

pub const DAY2_SESSION2: &[Choice] = &[
    choice("ai", "Artificial Intelligence"),
    choice("blue-economy", "Blue Economy"),
    choice("health", "Health & Medical Technologies"),
];

pub const DAY3_SESSION1: &[Choice] = &[
    choice("materials", "Advanced Materials & Manufacturing"),
    choice("communications", "Digital Communications"),
    choice("space", "Space Technologies"),
];

pub const DAY3_SESSION2: &[Choice] = &[
    choice("agriculture", "Emerging Agriculture Technologies"),
    choice("electronics", "Electronics & Semiconductor Manufacturing"),
];

pub const CHECKIN_DATES: &[Choice] = &[
    choice("02-nov", "02 Nov 2025"),
    choice("03-nov", "03 Nov 2025"),
    choice("04-nov", "04 Nov 2025"),
    choice("05-nov", "05 Nov 2025"),
];

pub const CHECKOUT_DATES: &[Choice] = &[
    choice("03-nov", "03 Nov 2025"),
    choice("04-nov", "04 Nov 2025"),
    choice("05-nov", "05 Nov 2025"),
    choice("06-nov", "06 Nov 2025"),
];

pub const MEAL_PREFERENCES: &[Choice] = &[
    choice("veg", "Vegetarian"),
    choice("non-veg", "Non-Vegetarian"),
    choice("vegan", "Vegan"),
    choice("jain", "Jain Meal"),
];

/// Check-in on the opening day is only possible from noon
pub const EARLY_CHECKIN_DATE: &str = "02-nov";
/// Check-out on the closing day must happen by 11 AM
pub const LATE_CHECKOUT_DATE: &str = "06-nov";

/// The option set of a selection field
pub fn options_for(field: Field) -> Option<&'static [Choice]> {
    match field {
        Field::Prefix => Some(PREFIXES),
        Field::Gender => Some(GENDERS),
        Field::IdProofType => Some(ID_PROOF_TYPES),
        Field::AttendInaugural
        | Field::RequireTransport
        | Field::RequireAccommodation
        | Field::SpecialAssistance => Some(YES_NO),
        Field::Day2Session1 => Some(DAY2_SESSION1),
        Field::Day2Session2 => Some(DAY2_SESSION2),
        Field::Day3Session1 => Some(DAY3_SESSION1),
        Field::Day3Session2 => Some(DAY3_SESSION2),
        Field::CheckinDate => Some(CHECKIN_DATES),
        Field::CheckoutDate => Some(CHECKOUT_DATES),
        Field::MealPreference => Some(MEAL_PREFERENCES),
        _ => None,
    }
}

/// Label for a stored option value
pub fn label_for(field: Field, value: &str) -> Option<&'static str> {
    options_for(field)?
        .iter()
        .find(|c| c.value == value)
        .map(|c| c.label)
}

/// Earliest allowed check-in time for a check-in date
pub fn checkin_min_time(checkin_date: &str) -> Option<TimeOfDay> {
    if checkin_date == EARLY_CHECKIN_DATE {
        TimeOfDay::from_hm(12, 0)
    } else {
        None
    }
}

/// Latest allowed check-out time for a check-out date
pub fn checkout_max_time(checkout_date: &str) -> Option<TimeOfDay> {
    if checkout_date == LATE_CHECKOUT_DATE {
        TimeOfDay::from_hm(11, 0)
    } else {
        None
    }
}
