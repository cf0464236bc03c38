//! Wizard steps
//!
//! The registration wizard is a fixed, linear sequence of five steps.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::Field;

/// One page of the registration wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    PersonalDetails,
    ProgramSchedule,
    TravelDetails,
    Accommodation,
    Preferences,
}

impl Step {
    /// All steps in order
    pub const ALL: [Step; 5] = [
        Step::PersonalDetails,
        Step::ProgramSchedule,
        Step::TravelDetails,
        Step::Accommodation,
        Step::Preferences,
    ];

    /// Total number of steps
    pub const COUNT: u8 = 5;

    /// The first step
    pub fn first() -> Self {
        Self::PersonalDetails
    }

    /// The final step, on which the form is submitted
    pub fn last() -> Self {
        Self::Preferences
    }

    /// 1-based step number
    pub fn number(self) -> u8 {
        match self {
            Self::PersonalDetails => 1,
            Self::ProgramSchedule => 2,
            Self::TravelDetails => 3,
            Self::Accommodation => 4,
            Self::Preferences => 5,
        }
    }

    /// Look a step up by its 1-based number
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::PersonalDetails),
            2 => Some(Self::ProgramSchedule),
            3 => Some(Self::TravelDetails),
            4 => Some(Self::Accommodation),
            5 => Some(Self::Preferences),
            _ => None,
        }
    }

    /// The following step, if any
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// The preceding step, if any
    pub fn prev(self) -> Option<Self> {
        Self::from_number(self.number().checked_sub(1)?)
    }

    pub fn is_first(self) -> bool {
        self == Self::first()
    }

    pub fn is_last(self) -> bool {
        self == Self::last()
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::PersonalDetails => "Personal Details",
            Self::ProgramSchedule => "Program Schedule",
            Self::TravelDetails => "Travel Details",
            Self::Accommodation => "Accommodation",
            Self::Preferences => "Preferences",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::PersonalDetails => "Basic information as per ID",
            Self::ProgramSchedule => "Session preferences",
            Self::TravelDetails => "Check-in/out information",
            Self::Accommodation => "Stay arrangements",
            Self::Preferences => "Meals & assistance",
        }
    }

    /// Fields belonging to this step, in form order
    pub fn fields(self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|field| field.step() == self)
            .collect()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering() {
        for (index, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.number() as usize, index + 1);
            assert_eq!(Step::from_number(step.number()), Some(*step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(6), None);
    }

    #[test]
    fn test_navigation_bounds() {
        assert_eq!(Step::first().prev(), None);
        assert_eq!(Step::last().next(), None);
        assert_eq!(Step::TravelDetails.next(), Some(Step::Accommodation));
        assert_eq!(Step::TravelDetails.prev(), Some(Step::ProgramSchedule));
    }

    #[test]
    fn test_every_field_has_one_step() {
        let total: usize = Step::ALL.iter().map(|s| s.fields().len()).sum();
        assert_eq!(total, Field::ALL.len());
        assert_eq!(Step::ProgramSchedule.fields().len(), 5);
        assert_eq!(
            Step::Accommodation.fields(),
            vec![Field::RequireAccommodation, Field::AccommodationAddress]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Step::TravelDetails.to_string(), "Step 3: Travel Details");
    }
}
