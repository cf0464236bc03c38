//! Submission repository for JSON storage
//!
//! Manages loading and saving submissions to data/submissions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::EsticError;
use crate::models::{Submission, SubmissionId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable submission data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SubmissionData {
    submissions: Vec<Submission>,
}

/// Repository for submission persistence
pub struct SubmissionRepository {
    path: PathBuf,
    data: RwLock<HashMap<SubmissionId, Submission>>,
}

impl SubmissionRepository {
    /// Create a new submission repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load submissions from disk
    pub fn load(&self) -> Result<(), EsticError> {
        let file_data: SubmissionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| EsticError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for submission in file_data.submissions {
            data.insert(submission.id, submission);
        }

        Ok(())
    }

    /// Save submissions to disk, oldest first
    pub fn save(&self) -> Result<(), EsticError> {
        let file_data = SubmissionData {
            submissions: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a submission by ID
    pub fn get(&self, id: SubmissionId) -> Result<Option<Submission>, EsticError> {
        let data = self
            .data
            .read()
            .map_err(|e| EsticError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all submissions ordered by submission time
    pub fn get_all(&self) -> Result<Vec<Submission>, EsticError> {
        let data = self
            .data
            .read()
            .map_err(|e| EsticError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut submissions: Vec<_> = data.values().cloned().collect();
        submissions.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at));
        Ok(submissions)
    }

    /// Resolve a user-typed identifier to exactly one submission
    pub fn find(&self, query: &str) -> Result<Submission, EsticError> {
        let mut matches: Vec<_> = self
            .get_all()?
            .into_iter()
            .filter(|s| s.id.matches(query))
            .collect();

        match matches.len() {
            0 => Err(EsticError::submission_not_found(query)),
            1 => Ok(matches.remove(0)),
            n => Err(EsticError::Validation(format!(
                "Identifier '{}' is ambiguous ({} submissions match)",
                query, n
            ))),
        }
    }

    /// Insert or update a submission
    pub fn upsert(&self, submission: Submission) -> Result<(), EsticError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| EsticError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(submission.id, submission);
        Ok(())
    }

    /// Delete a submission, returning whether it existed
    pub fn delete(&self, id: SubmissionId) -> Result<bool, EsticError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| EsticError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count submissions
    pub fn count(&self) -> Result<usize, EsticError> {
        let data = self
            .data
            .read()
            .map_err(|e| EsticError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
