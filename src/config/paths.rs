//! Path management for the registration wizard
//!
//! ## Path Resolution Order
//!
//! 1. `ESTIC_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/estic-registration` or `~/.config/estic-registration`
//! 3. Windows: `%APPDATA%\estic-registration`

use std::path::PathBuf;

use crate::error::EsticError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "ESTIC_DATA_DIR";

/// Manages all paths used by the application
#[derive(Debug, Clone)]
pub struct EsticPaths {
    /// Base directory for all application data
    base_dir: PathBuf,
}

impl EsticPaths {
    /// Create a new EsticPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home/config directory
    /// can be determined.
    pub fn new() -> Result<Self, EsticError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create EsticPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to submissions.json
    pub fn submissions_file(&self) -> PathBuf {
        self.data_dir().join("submissions.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), EsticError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EsticError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| EsticError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, EsticError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                EsticError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("estic-registration"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, EsticError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| EsticError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("estic-registration"))
}
