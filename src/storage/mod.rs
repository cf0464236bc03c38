//! Storage layer
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod file_io;
pub mod submissions;

pub use file_io::{read_json, write_json_atomic};
pub use submissions::SubmissionRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::EsticPaths;
use crate::error::EsticError;

/// Main storage coordinator
pub struct Storage {
    audit: AuditLogger,
    pub submissions: SubmissionRepository,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: EsticPaths) -> Result<Self, EsticError> {
        paths.ensure_directories()?;

        Ok(Self {
            submissions: SubmissionRepository::new(paths.submissions_file()),
            audit: AuditLogger::new(paths.audit_log()),
        })
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), EsticError> {
        self.submissions.load()
    }

    /// The audit log writer
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), EsticError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record a delete operation in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), EsticError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EsticPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        storage.load_all().unwrap();
        assert_eq!(storage.submissions.count().unwrap(), 0);
    }
}
