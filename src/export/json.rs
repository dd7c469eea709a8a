//! JSON Export functionality
//!
//! Exports the complete store (requests, comments, audit events) to JSON
//! with schema versioning.

use std::collections::{BTreeMap, HashSet};
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::audit::AuditEvent;
use crate::error::{MatreqError, MatreqResult};
use crate::models::{Comment, Request};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full store export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All requests, newest first
    pub requests: Vec<Request>,

    /// All comments, oldest first
    pub comments: Vec<Comment>,

    /// All audit events, oldest first
    pub audit_events: Vec<AuditEvent>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub request_count: usize,
    pub comment_count: usize,
    pub audit_event_count: usize,

    /// Number of requests per status
    pub status_counts: BTreeMap<String, usize>,

    /// Creation time of the oldest request
    pub earliest_request: Option<DateTime<Utc>>,

    /// Creation time of the newest request
    pub latest_request: Option<DateTime<Utc>>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> MatreqResult<Self> {
        let requests = storage.requests.get_all()?;
        let comments = storage.comments.get_all()?;
        let audit_events = storage.audit_log().read_all()?;

        let mut status_counts = BTreeMap::new();
        for request in &requests {
            *status_counts.entry(request.status.to_string()).or_insert(0) += 1;
        }

        let metadata = ExportMetadata {
            request_count: requests.len(),
            comment_count: comments.len(),
            audit_event_count: audit_events.len(),
            status_counts,
            earliest_request: requests.iter().map(|r| r.created_at).min(),
            latest_request: requests.iter().map(|r| r.created_at).max(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            requests,
            comments,
            audit_events,
            metadata,
        })
    }

    /// Check that comments and events only reference exported requests
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let request_ids: HashSet<_> = self.requests.iter().map(|r| r.id).collect();

        for comment in &self.comments {
            if !request_ids.contains(&comment.request_id) {
                return Err(format!(
                    "Comment {} references unknown request {}",
                    comment.id, comment.request_id
                ));
            }
        }

        for event in &self.audit_events {
            if !request_ids.contains(&event.request_id) {
                return Err(format!(
                    "Audit event {} references unknown request {}",
                    event.id, event.request_id
                ));
            }
        }

        Ok(())
    }
}

/// Export the full store to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> MatreqResult<()> {
    let export = FullExport::from_storage(storage)?;
    export.validate().map_err(MatreqError::Export)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| MatreqError::Export(e.to_string()))?;

    Ok(())
}
