//! Storage layer for matreq
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Requests, comments and the audit log are separate collections
//! tied together by request id; deleting a request cascades to the others.

pub mod comments;
pub mod file_io;
pub mod hierarchy;
pub mod init;
pub mod requests;

pub use comments::CommentRepository;
pub use file_io::{read_json, write_json_atomic};
pub use hierarchy::HierarchyRepository;
pub use init::initialize_storage;
pub use requests::RequestRepository;

use tracing::info;

use crate::audit::{AuditLogger, AuditTrail};
use crate::config::paths::MatreqPaths;
use crate::error::MatreqError;
use crate::models::RequestId;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: MatreqPaths,
    pub requests: RequestRepository,
    pub comments: CommentRepository,
    pub hierarchy: HierarchyRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: MatreqPaths) -> Result<Self, MatreqError> {
        paths.ensure_directories()?;

        Ok(Self {
            requests: RequestRepository::new(paths.requests_file()),
            comments: CommentRepository::new(paths.comments_file()),
            hierarchy: HierarchyRepository::new(paths.hierarchy_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &MatreqPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), MatreqError> {
        self.requests.load()?;
        self.comments.load()?;
        self.hierarchy.load()?;
        Ok(())
    }

    /// The audit trail over this store's log
    pub fn audit(&self) -> AuditTrail<'_> {
        AuditTrail::new(&self.audit)
    }

    /// The raw audit log
    pub fn audit_log(&self) -> &AuditLogger {
        &self.audit
    }

    /// Delete a request together with its comments and audit events
    ///
    /// Returns false if no such request exists. Comments and audit events go
    /// first; the request is removed last, so a failed purge leaves it in
    /// place for a retry.
    pub fn delete_request(&self, id: RequestId) -> Result<bool, MatreqError> {
        if !self.requests.exists(id)? {
            return Ok(false);
        }

        let comments = self.comments.remove_for(id)?;
        let events = self.audit.purge_request(id).map_err(|e| {
            MatreqError::Storage(format!("Failed to purge audit events of {}: {}", id, e))
        })?;

        if !self.requests.remove(id)? {
            return Ok(false);
        }

        info!(request = %id, comments, events, "deleted request");
        Ok(true)
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }
}
