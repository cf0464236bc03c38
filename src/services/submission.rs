//! Submission service
//!
//! The default submission collaborator: stores completed registrations and
//! records each create/delete in the audit log.

use crate::audit::{AuditEntry, EntityType};
use crate::error::{EsticError, EsticResult};
use crate::models::{RegistrationRecord, Submission};
use crate::storage::Storage;
use crate::wizard::{validation, SubmissionSink};

/// Service for submission management
pub struct SubmissionService<'a> {
    storage: &'a Storage,
    audit_enabled: bool,
}

impl<'a> SubmissionService<'a> {
    /// Create a new submission service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            audit_enabled: true,
        }
    }

    /// Turn audit logging on or off
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit_enabled = enabled;
        self
    }

    /// Store a complete record as a new submission
    ///
    /// The record is re-validated; an incomplete record is refused. If the
    /// store or the audit log cannot be written, the new submission is
    /// removed again so a retry never stores a second copy.
    pub fn submit(&self, record: RegistrationRecord) -> EsticResult<Submission> {
        if let Some((step, errors)) = validation::first_invalid_step(&record) {
            return Err(EsticError::Submission(format!(
                "{} has {} invalid field(s)",
                step,
                errors.len()
            )));
        }

        let submission = Submission::new(record);
        self.storage.submissions.upsert(submission.clone())?;

        if let Err(e) = self.storage.submissions.save() {
            self.storage.submissions.delete(submission.id)?;
            return Err(e);
        }

        if self.audit_enabled {
            if let Err(e) = self.storage.log_create(
                EntityType::Submission,
                submission.id.to_string(),
                Some(submission.record.display_name()),
                &submission.record,
            ) {
                self.discard(&submission)?;
                return Err(e);
            }
        }

        Ok(submission)
    }

    /// Remove a submission that was saved but never audited
    fn discard(&self, submission: &Submission) -> EsticResult<()> {
        self.storage.submissions.delete(submission.id)?;
        self.storage.submissions.save().map_err(|e| {
            EsticError::Storage(format!(
                "Failed to roll back submission {}: {}",
                submission.id, e
            ))
        })
    }

    /// All stored submissions, oldest first
    pub fn list(&self) -> EsticResult<Vec<Submission>> {
        self.storage.submissions.get_all()
    }

    /// Look up a submission by full or short ID
    pub fn find(&self, query: &str) -> EsticResult<Submission> {
        self.storage.submissions.find(query)
    }

    /// Delete a submission by full or short ID
    pub fn delete(&self, query: &str) -> EsticResult<Submission> {
        let submission = self.find(query)?;

        self.storage.submissions.delete(submission.id)?;
        self.storage.submissions.save()?;

        if self.audit_enabled {
            self.storage.log_delete(
                EntityType::Submission,
                submission.id.to_string(),
                Some(submission.record.display_name()),
                &submission.record,
            )?;
        }

        Ok(submission)
    }

    /// The latest audit log entries, oldest first
    pub fn history(&self, limit: usize) -> EsticResult<Vec<AuditEntry>> {
        self.storage.audit().read_recent(limit)
    }
}

impl SubmissionSink for SubmissionService<'_> {
    fn accept(&mut self, record: RegistrationRecord) -> EsticResult<Submission> {
        self.submit(record)
    }
}
