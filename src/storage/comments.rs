//! Comment repository for JSON storage
//!
//! Comments are stored flat in comments.json and grouped by request in memory.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::MatreqError;
use crate::models::{Comment, RequestId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CommentData {
    comments: Vec<Comment>,
}

/// Repository for comment persistence
pub struct CommentRepository {
    path: PathBuf,
    data: RwLock<HashMap<RequestId, Vec<Comment>>>,
}

impl CommentRepository {
    /// Create a new comment repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load comments from disk
    pub fn load(&self) -> Result<(), MatreqError> {
        let file_data: CommentData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for comment in file_data.comments {
            data.entry(comment.request_id).or_default().push(comment);
        }
        for thread in data.values_mut() {
            thread.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        }

        debug!(requests = data.len(), path = %self.path.display(), "loaded comments");
        Ok(())
    }

    /// Save comments to disk
    pub fn save(&self) -> Result<(), MatreqError> {
        let data = self
            .data
            .read()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut comments: Vec<_> = data.values().flatten().cloned().collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        write_json_atomic(&self.path, &CommentData { comments })
    }

    /// Append a comment and persist it, dropping it again if the write fails
    pub fn append(&self, comment: Comment) -> Result<(), MatreqError> {
        let request_id = comment.request_id;
        let comment_id = comment.id;

        {
            let mut data = self.data.write().map_err(|e| {
                MatreqError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            data.entry(request_id).or_default().push(comment);
        }

        if let Err(e) = self.save() {
            let mut data = self.data.write().map_err(|e| {
                MatreqError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            if let Some(thread) = data.get_mut(&request_id) {
                thread.retain(|c| c.id != comment_id);
                if thread.is_empty() {
                    data.remove(&request_id);
                }
            }
            return Err(e);
        }

        Ok(())
    }

    /// Comments of a request, oldest first
    pub fn get_for(&self, request_id: RequestId) -> Result<Vec<Comment>, MatreqError> {
        let data = self
            .data
            .read()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&request_id).cloned().unwrap_or_default())
    }

    /// Every comment, oldest first
    pub fn get_all(&self) -> Result<Vec<Comment>, MatreqError> {
        let data = self
            .data
            .read()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut comments: Vec<_> = data.values().flatten().cloned().collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }

    /// Remove every comment of a request and persist; returns how many were removed
    pub fn remove_for(&self, request_id: RequestId) -> Result<usize, MatreqError> {
        let removed = {
            let mut data = self.data.write().map_err(|e| {
                MatreqError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            data.remove(&request_id)
        };

        let Some(removed) = removed else {
            return Ok(0);
        };

        if let Err(e) = self.save() {
            let mut data = self.data.write().map_err(|e| {
                MatreqError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            data.insert(request_id, removed);
            return Err(e);
        }

        Ok(removed.len())
    }

    /// Number of comments on a request
    pub fn count_for(&self, request_id: RequestId) -> Result<usize, MatreqError> {
        let data = self
            .data
            .read()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&request_id).map(Vec::len).unwrap_or(0))
    }
}
