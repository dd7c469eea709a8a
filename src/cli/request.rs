//! Request CLI commands
//!
//! Implements CLI commands for submitting, correcting and reviewing
//! change-requests.

use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Subcommand;
use tracing::warn;

use crate::config::paths::MatreqPaths;
use crate::config::settings::Settings;
use crate::display::{
    format_comments, format_history, format_request_details, format_request_list,
    format_update_outcome,
};
use crate::error::{MatreqError, MatreqResult};
use crate::models::{RequestStatus, Snapshot};
use crate::services::Session;
use crate::storage::{read_json, write_json_atomic};

/// Request subcommands
#[derive(Subcommand)]
pub enum RequestCommands {
    /// Submit a new request
    Create {
        /// Attribute assignment (repeatable), e.g. --set MAKTX="Cup Ramen"
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
        /// Read attributes from a JSON file (e.g. a saved draft)
        #[arg(short, long, value_name = "FILE")]
        from_file: Option<PathBuf>,
        /// Seed the request from an existing one
        #[arg(short, long, value_name = "REQUEST")]
        clone_from: Option<String>,
        /// Text to replace in the cloned attributes
        #[arg(long, requires = "clone_from")]
        find: Option<String>,
        /// Replacement text for --find
        #[arg(long, requires = "find")]
        replace: Option<String>,
    },
    /// List requests
    List {
        /// Only show requests in this status
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Show request details
    Show {
        /// Request ID (full or short)
        request: String,
        /// Also show blank attributes
        #[arg(short, long)]
        all: bool,
    },
    /// Correct attributes of a request
    Edit {
        /// Request ID (full or short)
        request: String,
        /// Attribute assignment (repeatable)
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
        /// Refuse the edit unless the stored version matches
        #[arg(long, value_name = "VERSION")]
        expect_version: Option<u64>,
    },
    /// Move a request to another status
    Status {
        /// Request ID (full or short)
        request: String,
        /// Target status (requested, review, approved, reject)
        status: String,
    },
    /// Delete a request with its comments and history
    Delete {
        /// Request ID (full or short)
        request: String,
    },
    /// Add a comment to a request
    Comment {
        /// Request ID (full or short)
        request: String,
        /// Comment text
        message: String,
    },
    /// Show the comments and change history of a request
    History {
        /// Request ID (full or short)
        request: String,
    },
}

/// Handle a request command
pub fn handle_request_command(
    session: &mut Session<'_>,
    settings: &Settings,
    cmd: RequestCommands,
) -> MatreqResult<()> {
    let date_format = settings.date_format.as_str();

    match cmd {
        RequestCommands::Create {
            set,
            from_file,
            clone_from,
            find,
            replace,
        } => {
            let mut snapshot = match from_file {
                Some(path) if !path.exists() => {
                    return Err(MatreqError::Io(format!(
                        "File not found: {}",
                        path.display()
                    )));
                }
                Some(path) => read_json::<Snapshot, _>(&path)?,
                None => Snapshot::new(),
            };
            snapshot = snapshot.merged(&Snapshot::from_assignments(&set)?);

            let result = match clone_from {
                Some(source) => session.templates().create_from(
                    &source,
                    find.as_deref(),
                    replace.as_deref(),
                    &snapshot,
                    session.user(),
                ),
                None => session.requests().create(&snapshot, session.user()),
            };

            let request = keep_draft_on_error(session.storage().paths(), &snapshot, result)?;

            println!("Created request: {}", request.title());
            println!("  ID:     {}", request.id);
            println!("  Status: {}", request.status);
            let missing = request.snapshot.missing_required();
            if !missing.is_empty() {
                let codes: Vec<_> = missing.iter().map(|k| k.code()).collect();
                println!("  Missing required attributes: {}", codes.join(", "));
            }
        }

        RequestCommands::List { status } => {
            let status = status.as_deref().map(parse_status).transpose()?;
            let requests = session.requests().list(status)?;
            println!("{}", format_request_list(&requests, date_format));
        }

        RequestCommands::Show { request, all } => {
            let found = session.select(&request)?;
            print!("{}", format_request_details(&found, date_format, all));
        }

        RequestCommands::Edit {
            request,
            set,
            expect_version,
        } => {
            if set.is_empty() {
                println!("No changes specified. Use --set KEY=VALUE to correct an attribute.");
                return Ok(());
            }

            let partial = Snapshot::from_assignments(&set)?;
            let found = session.select(&request)?;

            let result = session
                .requests()
                .update(found.id, &partial, session.user(), expect_version);
            let outcome = keep_draft_on_error(session.storage().paths(), &partial, result)?;

            print!("{}", format_update_outcome(&outcome));
        }

        RequestCommands::Status { request, status } => {
            let status = parse_status(&status)?;
            let found = session.select(&request)?;
            let updated = session
                .requests()
                .transition_status(found.id, status, session.user())?;

            if updated.status == found.status {
                println!("Request {} is already {}", updated.id, updated.status);
            } else {
                println!(
                    "Request {}: {} → {}",
                    updated.id, found.status, updated.status
                );
            }
        }

        RequestCommands::Delete { request } => {
            let found = session.requests().resolve(&request)?;
            let deleted = session.requests().delete(found.id)?;
            println!("Deleted request: {} ({})", deleted.title(), deleted.id);
        }

        RequestCommands::Comment { request, message } => {
            let found = session.select(&request)?;
            let comment = session
                .requests()
                .add_comment(found.id, &message, session.user())?;
            println!("Comment added to {} by {}", found.id, comment.writer);
        }

        RequestCommands::History { request } => {
            let found = session.select(&request)?;
            let service = session.requests();

            println!("Comments");
            print!("{}", format_comments(&service.comments(found.id)?, date_format));
            println!();
            println!("History");
            print!("{}", format_history(&service.history(found.id)?));
        }
    }

    Ok(())
}

fn parse_status(s: &str) -> MatreqResult<RequestStatus> {
    RequestStatus::parse(s).ok_or_else(|| {
        MatreqError::Validation(format!(
            "Invalid status: '{}'. Valid statuses: requested, review, approved, reject",
            s
        ))
    })
}

/// Write the attempted attributes to the drafts directory when `result` failed
fn keep_draft_on_error<T>(
    paths: &MatreqPaths,
    snapshot: &Snapshot,
    result: MatreqResult<T>,
) -> MatreqResult<T> {
    if result.is_err() && !snapshot.is_empty() {
        match save_draft(paths, snapshot) {
            Ok(path) => eprintln!(
                "Input saved to {} (retry with --from-file)",
                path.display()
            ),
            Err(e) => warn!(error = %e, "failed to save draft"),
        }
    }
    result
}

/// Save a snapshot as `draft-<timestamp>.json` under the drafts directory
pub fn save_draft(paths: &MatreqPaths, snapshot: &Snapshot) -> MatreqResult<PathBuf> {
    let path = draft_path(&paths.drafts_dir());
    write_json_atomic(&path, snapshot)?;
    Ok(path)
}

fn draft_path(dir: &Path) -> PathBuf {
    let stamp = Utc::now().format("%Y%m%d-%H%M%S%3f");
    dir.join(format!("draft-{}.json", stamp))
}
