//! CLI commands for data export
//!
//! Writes the downstream bulk-load sheets and full store dumps.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::config::settings::Settings;
use crate::error::{MatreqError, MatreqResult};
use crate::export::{self, json, yaml};
use crate::storage::Storage;

/// Full export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full store)
    Json,
    /// YAML format (full store, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Write the bulk-load sheets as CSV files
    Sheets {
        /// Directory to write the sheets into
        output_dir: PathBuf,

        /// Include requests in every status, not only approved ones
        #[arg(short, long)]
        all: bool,

        /// File name prefix (defaults to the configured prefix)
        #[arg(short, long)]
        prefix: Option<String>,
    },

    /// Export the whole store to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> MatreqResult<()> {
    match cmd {
        ExportCommands::Sheets {
            output_dir,
            all,
            prefix,
        } => {
            let approved_only = settings.export.approved_only && !all;
            let prefix = prefix.unwrap_or_else(|| settings.export.file_prefix.clone());

            let requests =
                export::select_for_export(storage.requests.get_all()?, approved_only);
            if requests.is_empty() {
                println!("No requests to export.");
                return Ok(());
            }

            let paths = export::export_sheets(&requests, &output_dir, &prefix)?;
            println!("Exported {} request(s):", requests.len());
            for path in paths {
                println!("  {}", path.display());
            }
        }

        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            let file = File::create(&output).map_err(|e| {
                MatreqError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);

            match format {
                ExportFormat::Json => json::export_full_json(storage, &mut writer, pretty)?,
                ExportFormat::Yaml => yaml::export_full_yaml(storage, &mut writer)?,
            }
            println!("Full store exported to: {}", output.display());
        }
    }

    Ok(())
}
