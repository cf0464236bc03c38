//! Time-of-day values
//!
//! Stored in the record as zero-padded 24-hour `HH:MM` strings. Because the
//! format is fixed width, ordering `TimeOfDay` values is the same as
//! comparing their string forms.

use chrono::{NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// A time of day with minute precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Build from a 24-hour hour and a minute
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse a zero-padded 24-hour `HH:MM` string
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.len() != 5 {
            return None;
        }
        NaiveTime::parse_from_str(s, "%H:%M").ok().map(Self)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Format as a 12-hour clock time, e.g. `12:00 PM`
    pub fn format_12h(&self) -> String {
        self.0.format("%-I:%M %p").to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid time '{}'. Use HH:MM (24-hour)", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let time = TimeOfDay::parse("09:45").unwrap();
        assert_eq!(time.hour(), 9);
        assert_eq!(time.minute(), 45);
        assert_eq!(time.to_string(), "09:45");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(TimeOfDay::parse("9:45").is_none());
        assert!(TimeOfDay::parse("24:00").is_none());
        assert!(TimeOfDay::parse("12:60").is_none());
        assert!(TimeOfDay::parse("noon").is_none());
        assert!(TimeOfDay::parse("").is_none());
    }

    #[test]
    fn test_ordering_matches_string_order() {
        let samples = ["00:00", "09:15", "11:45", "12:00", "12:15", "23:45"];
        for a in samples {
            for b in samples {
                let ta = TimeOfDay::parse(a).unwrap();
                let tb = TimeOfDay::parse(b).unwrap();
                assert_eq!(ta.cmp(&tb), a.cmp(b));
            }
        }
    }

    #[test]
    fn test_format_12h() {
        assert_eq!(TimeOfDay::from_hm(0, 0).unwrap().format_12h(), "12:00 AM");
        assert_eq!(TimeOfDay::from_hm(12, 0).unwrap().format_12h(), "12:00 PM");
        assert_eq!(TimeOfDay::from_hm(11, 0).unwrap().format_12h(), "11:00 AM");
        assert_eq!(TimeOfDay::from_hm(13, 15).unwrap().format_12h(), "1:15 PM");
    }
}
