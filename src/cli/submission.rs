//! Submission CLI commands
//!
//! Lists, shows, deletes and exports stored registrations.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::{ExportFormat, Settings};
use crate::display::{format_submission_details, format_submission_list};
use crate::error::{EsticError, EsticResult};
use crate::export::export_submissions;
use crate::services::SubmissionService;
use crate::storage::Storage;

/// Submission subcommands
#[derive(Subcommand)]
pub enum SubmissionCommands {
    /// List all stored submissions
    List,
    /// Show one submission in full
    Show {
        /// Submission ID (full UUID or short reg- form)
        id: String,
    },
    /// Delete a submission
    Delete {
        /// Submission ID (full UUID or short reg- form)
        id: String,
    },
    /// Show recent create/delete activity from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
    /// Export all submissions
    Export {
        /// Export format (csv, json, yaml); defaults to the configured format
        #[arg(short, long)]
        format: Option<String>,
        /// Output file path; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a submission command
pub fn handle_submission_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SubmissionCommands,
) -> EsticResult<()> {
    let service = SubmissionService::new(storage).with_audit(settings.audit_enabled);

    match cmd {
        SubmissionCommands::List => {
            let submissions = service.list()?;
            println!("{}", format_submission_list(&submissions));
        }

        SubmissionCommands::Show { id } => {
            let submission = service.find(&id)?;
            print!("{}", format_submission_details(&submission));
        }

        SubmissionCommands::Delete { id } => {
            let deleted = service.delete(&id)?;
            println!("Deleted submission: {}", deleted);
        }

        SubmissionCommands::History { limit } => {
            let entries = service.history(limit)?;
            if entries.is_empty() {
                println!("No audit entries found.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }

        SubmissionCommands::Export { format, output } => {
            let format = match format {
                Some(name) => ExportFormat::parse(&name).ok_or_else(|| {
                    EsticError::Validation(format!(
                        "Invalid export format: '{}'. Valid formats: csv, json, yaml",
                        name
                    ))
                })?,
                None => settings.export_format,
            };

            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        EsticError::Export(format!(
                            "Failed to create file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    let mut writer = BufWriter::new(file);
                    export_submissions(storage, format, &settings.event_name, &mut writer)?;
                    writer
                        .flush()
                        .map_err(|e| EsticError::Export(e.to_string()))?;

                    let count = storage.submissions.count()?;
                    println!(
                        "Exported {} submission(s) as {} to: {}",
                        count,
                        format,
                        path.display()
                    );
                }
                None => {
                    let stdout = io::stdout();
                    let mut writer = stdout.lock();
                    export_submissions(storage, format, &settings.event_name, &mut writer)?;
                    writeln!(writer).map_err(|e| EsticError::Export(e.to_string()))?;
                }
            }
        }
    }

    Ok(())
}
