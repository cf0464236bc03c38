//! Submission model
//!
//! A registration record that has been handed off and stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::RegistrationRecord;
use super::ids::SubmissionId;

/// A stored registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Unique identifier
    pub id: SubmissionId,

    /// When the registration was handed off
    pub submitted_at: DateTime<Utc>,

    /// The complete record as submitted
    pub record: RegistrationRecord,
}

impl Submission {
    /// Wrap a record as a new submission stamped with the current time
    pub fn new(record: RegistrationRecord) -> Self {
        Self {
            id: SubmissionId::new(),
            submitted_at: Utc::now(),
            record,
        }
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.record.display_name(), self.id)
    }
}
