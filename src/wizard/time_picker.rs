//! Time-of-day picker
//!
//! The picker edits a draft on a 12-hour clock (hour 1-12, quarter-hour
//! minutes, AM/PM) independently of the confirmed value. Confirming converts
//! the draft to 24-hour form and checks it against optional bounds:
//!
//! ```text
//! Closed --open--> Editing --confirm (in bounds)--> Closed   [value reported]
//!                  Editing --confirm (out of bounds)--> Editing
//!                  Editing --cancel--> Closed                 [nothing reported]
//! ```

use std::fmt;

use thiserror::Error;

use crate::models::TimeOfDay;

/// AM or PM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    pub fn toggled(self) -> Self {
        match self {
            Self::Am => Self::Pm,
            Self::Pm => Self::Am,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Am => write!(f, "AM"),
            Self::Pm => write!(f, "PM"),
        }
    }
}

/// Minutes offered by the picker
pub const QUARTER_HOURS: [u8; 4] = [0, 15, 30, 45];

/// Why a draft time could not be confirmed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRejection {
    #[error("Time must be after {}", .0.format_12h())]
    BeforeMinimum(TimeOfDay),

    #[error("Time must be before {}", .0.format_12h())]
    AfterMaximum(TimeOfDay),

    #[error("Time picker is not open")]
    NotEditing,
}

/// Optional inclusive limits on a time value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeBounds {
    pub min: Option<TimeOfDay>,
    pub max: Option<TimeOfDay>,
}

impl TimeBounds {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn at_least(min: TimeOfDay) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: TimeOfDay) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Check a candidate time against both limits
    pub fn check(&self, time: TimeOfDay) -> Result<(), TimeRejection> {
        if let Some(min) = self.min {
            if time < min {
                return Err(TimeRejection::BeforeMinimum(min));
            }
        }
        if let Some(max) = self.max {
            if time > max {
                return Err(TimeRejection::AfterMaximum(max));
            }
        }
        Ok(())
    }

    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.check(time).is_ok()
    }
}

/// The in-progress selection while the picker is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDraft {
    hour: u8,
    minute: u8,
    period: Period,
}

impl Default for TimeDraft {
    /// 12:00 PM
    fn default() -> Self {
        Self {
            hour: 12,
            minute: 0,
            period: Period::Pm,
        }
    }
}

impl TimeDraft {
    /// Build a draft; `None` unless hour is 1-12 and minute a quarter hour
    pub fn new(hour: u8, minute: u8, period: Period) -> Option<Self> {
        if !(1..=12).contains(&hour) || !QUARTER_HOURS.contains(&minute) {
            return None;
        }
        Some(Self {
            hour,
            minute,
            period,
        })
    }

    /// Seed a draft from a 24-hour value, rounding minutes down to a quarter
    pub fn from_time(time: TimeOfDay) -> Self {
        let hour24 = time.hour() as u8;
        let hour = match hour24 {
            0 => 12,
            13..=23 => hour24 - 12,
            h => h,
        };
        let period = if hour24 >= 12 { Period::Pm } else { Period::Am };
        let minute = (time.minute() as u8 / 15) * 15;
        Self {
            hour,
            minute,
            period,
        }
    }

    /// Convert to 24-hour form
    pub fn to_time(self) -> TimeOfDay {
        let hour24 = match (self.hour, self.period) {
            (12, Period::Am) => 0,
            (12, Period::Pm) => 12,
            (h, Period::Am) => h,
            (h, Period::Pm) => h + 12,
        };
        TimeOfDay::from_hm(u32::from(hour24), u32::from(self.minute))
            .unwrap_or_else(|| unreachable!("draft holds hour 1-12 and a quarter-hour minute"))
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Set the hour; values outside 1-12 are ignored
    pub fn set_hour(&mut self, hour: u8) -> bool {
        if (1..=12).contains(&hour) {
            self.hour = hour;
            true
        } else {
            false
        }
    }

    /// Set the minute; values other than 0/15/30/45 are ignored
    pub fn set_minute(&mut self, minute: u8) -> bool {
        if QUARTER_HOURS.contains(&minute) {
            self.minute = minute;
            true
        } else {
            false
        }
    }

    pub fn set_period(&mut self, period: Period) {
        self.period = period;
    }

    pub fn toggle_period(&mut self) {
        self.period = self.period.toggled();
    }

    /// 12 wraps to 1
    pub fn next_hour(&mut self) {
        self.hour = self.hour % 12 + 1;
    }

    /// 1 wraps to 12
    pub fn prev_hour(&mut self) {
        self.hour = if self.hour == 1 { 12 } else { self.hour - 1 };
    }

    /// 45 wraps to 00
    pub fn next_minute(&mut self) {
        self.minute = (self.minute + 15) % 60;
    }

    /// 00 wraps to 45
    pub fn prev_minute(&mut self) {
        self.minute = (self.minute + 45) % 60;
    }
}

impl fmt::Display for TimeDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.period)
    }
}

/// Open/closed state of the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    Closed,
    Editing(TimeDraft),
}

/// A time-of-day input constrained by optional bounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeOfDayPicker {
    value: Option<TimeOfDay>,
    bounds: TimeBounds,
    state: PickerState,
}

impl TimeOfDayPicker {
    pub fn new(bounds: TimeBounds) -> Self {
        Self {
            value: None,
            bounds,
            state: PickerState::Closed,
        }
    }

    /// Start from an already confirmed value
    pub fn with_value(mut self, value: Option<TimeOfDay>) -> Self {
        self.value = value;
        self
    }

    /// The last confirmed value
    pub fn value(&self) -> Option<TimeOfDay> {
        self.value
    }

    pub fn bounds(&self) -> TimeBounds {
        self.bounds
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PickerState::Editing(_))
    }

    /// Open for editing, seeding the draft from the confirmed value
    ///
    /// Opening an already open picker keeps the current draft.
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        let draft = self.value.map(TimeDraft::from_time).unwrap_or_default();
        self.state = PickerState::Editing(draft);
    }

    pub fn draft(&self) -> Option<&TimeDraft> {
        match &self.state {
            PickerState::Editing(draft) => Some(draft),
            PickerState::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut TimeDraft> {
        match &mut self.state {
            PickerState::Editing(draft) => Some(draft),
            PickerState::Closed => None,
        }
    }

    /// Bounds check of the current draft
    pub fn check_draft(&self) -> Result<TimeOfDay, TimeRejection> {
        let draft = self.draft().ok_or(TimeRejection::NotEditing)?;
        let time = draft.to_time();
        self.bounds.check(time)?;
        Ok(time)
    }

    /// Whether confirming now would succeed
    pub fn can_confirm(&self) -> bool {
        self.check_draft().is_ok()
    }

    /// Inline message for an out-of-bounds draft
    pub fn validation_message(&self) -> Option<String> {
        match self.check_draft() {
            Err(rejection @ (TimeRejection::BeforeMinimum(_) | TimeRejection::AfterMaximum(_))) => {
                Some(rejection.to_string())
            }
            _ => None,
        }
    }

    /// Commit the draft
    ///
    /// On success the picker closes and the confirmed value is returned for
    /// the caller to report. On rejection the picker stays open with its
    /// draft untouched.
    pub fn confirm(&mut self) -> Result<TimeOfDay, TimeRejection> {
        let time = self.check_draft()?;
        self.value = Some(time);
        self.state = PickerState::Closed;
        Ok(time)
    }

    /// Discard the draft and close without reporting
    pub fn cancel(&mut self) {
        self.state = PickerState::Closed;
    }
}
