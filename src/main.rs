use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use estic::cli::{
    handle_options_command, handle_submission_command, handle_validate_command,
    SubmissionCommands,
};
use estic::config::{paths::EsticPaths, settings::Settings};
use estic::storage::Storage;

#[derive(Parser)]
#[command(
    name = "estic",
    author = "ESTIC Organizing Committee",
    version,
    about = "Registration wizard for the ESTIC 2025 conference",
    long_about = "A five-step registration form for ESTIC 2025. Run without a \
                  subcommand to open the interactive wizard, or use the \
                  subcommands to validate records and manage submissions."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive registration wizard
    #[command(alias = "ui")]
    Tui,

    /// Validate a registration record stored as JSON or YAML
    Validate {
        /// Path to the record file
        file: PathBuf,
        /// Only check this step (1-5)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        step: Option<u8>,
    },

    /// List the allowed values of choice fields
    Options {
        /// Field name, e.g. mealPreference
        field: Option<String>,
    },

    /// Submitted registration commands
    #[command(subcommand, alias = "sub")]
    Submission(SubmissionCommands),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Commands that work on a single file need no data directory
    match &cli.command {
        Some(Commands::Validate { file, step }) => {
            handle_validate_command(file, *step)?;
            return Ok(());
        }
        Some(Commands::Options { field }) => {
            handle_options_command(field.as_deref())?;
            return Ok(());
        }
        _ => {}
    }

    let paths = EsticPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        None | Some(Commands::Tui) => {
            estic::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::Submission(cmd)) => {
            handle_submission_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("ESTIC Registration Configuration");
            println!("================================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Event name:     {}", settings.event_name);
            println!("  Audit enabled:  {}", settings.audit_enabled);
            println!("  Export format:  {:?}", settings.export_format);
        }
        Some(Commands::Validate { .. }) | Some(Commands::Options { .. }) => {}
    }

    Ok(())
}
