//! User settings for the registration wizard
//!
//! Holds the event branding shown in the wizard, the confirmation text shown
//! after a successful submission, and export/audit preferences.

use serde::{Deserialize, Serialize};

use super::paths::EsticPaths;
use crate::error::EsticError;

/// Output format for submission exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values, one row per submission
    #[default]
    Csv,
    /// Pretty-printed JSON document
    Json,
    /// YAML document
    Yaml,
}

impl ExportFormat {
    /// Parse an export format from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Event name shown in the wizard header
    #[serde(default = "default_event_name")]
    pub event_name: String,

    /// Message shown once a registration has been handed off
    #[serde(default = "default_confirmation_message")]
    pub confirmation_message: String,

    /// Whether submissions are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Default format for `submission export`
    #[serde(default)]
    pub export_format: ExportFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_event_name() -> String {
    "ESTIC 2025".to_string()
}

fn default_confirmation_message() -> String {
    "Registration submitted successfully! Thank you for registering for ESTIC 2025.".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            event_name: default_event_name(),
            confirmation_message: default_confirmation_message(),
            audit_enabled: default_audit_enabled(),
            export_format: ExportFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &EsticPaths) -> Result<Self, EsticError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| EsticError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                EsticError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &EsticPaths) -> Result<(), EsticError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| EsticError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| EsticError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
