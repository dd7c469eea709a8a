//! Request repository for JSON storage
//!
//! Manages loading and saving requests to requests.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::MatreqError;
use crate::models::{Request, RequestId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable request data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct RequestData {
    requests: Vec<Request>,
}

/// Repository for request persistence
pub struct RequestRepository {
    path: PathBuf,
    data: RwLock<HashMap<RequestId, Request>>,
}

impl RequestRepository {
    /// Create a new request repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load requests from disk
    pub fn load(&self) -> Result<(), MatreqError> {
        let file_data: RequestData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for request in file_data.requests {
            data.insert(request.id, request);
        }

        debug!(count = data.len(), path = %self.path.display(), "loaded requests");
        Ok(())
    }

    /// Save requests to disk
    pub fn save(&self) -> Result<(), MatreqError> {
        let data = self
            .data
            .read()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut requests: Vec<_> = data.values().cloned().collect();
        sort_newest_first(&mut requests);

        write_json_atomic(&self.path, &RequestData { requests })
    }

    /// Get a request by ID
    pub fn get(&self, id: RequestId) -> Result<Option<Request>, MatreqError> {
        let data = self
            .data
            .read()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all requests, newest first
    pub fn get_all(&self) -> Result<Vec<Request>, MatreqError> {
        let data = self
            .data
            .read()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut requests: Vec<_> = data.values().cloned().collect();
        sort_newest_first(&mut requests);
        Ok(requests)
    }

    /// Find a request by full UUID or short display ID (`req-1a2b3c4d`)
    pub fn find(&self, identifier: &str) -> Result<Option<Request>, MatreqError> {
        if let Ok(id) = identifier.trim().parse::<RequestId>() {
            return self.get(id);
        }

        let data = self
            .data
            .read()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let matches: Vec<_> = data
            .values()
            .filter(|r| r.id.matches_short(identifier))
            .collect();

        match matches.as_slice() {
            [] => Ok(None),
            [single] => Ok(Some((*single).clone())),
            _ => Err(MatreqError::Validation(format!(
                "Request identifier '{}' is ambiguous ({} matches)",
                identifier,
                matches.len()
            ))),
        }
    }

    /// Insert or update a request in memory
    pub fn upsert(&self, request: Request) -> Result<(), MatreqError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(request.id, request);
        Ok(())
    }

    /// Insert or update a request and persist it
    ///
    /// If the write fails the in-memory state is restored, so the store never
    /// reports a request it could not persist.
    pub fn commit(&self, request: Request) -> Result<(), MatreqError> {
        let id = request.id;
        let previous = self.get(id)?;

        self.upsert(request)?;

        if let Err(e) = self.save() {
            self.restore(id, previous)?;
            return Err(e);
        }

        Ok(())
    }

    /// Delete a request from memory
    pub fn delete(&self, id: RequestId) -> Result<bool, MatreqError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Delete a request and persist the removal, restoring it on failure
    pub fn remove(&self, id: RequestId) -> Result<bool, MatreqError> {
        let previous = self.get(id)?;
        if previous.is_none() {
            return Ok(false);
        }

        self.delete(id)?;

        if let Err(e) = self.save() {
            self.restore(id, previous)?;
            return Err(e);
        }

        Ok(true)
    }

    /// Check if a request exists
    pub fn exists(&self, id: RequestId) -> Result<bool, MatreqError> {
        let data = self
            .data
            .read()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.contains_key(&id))
    }

    /// Check if a master code is already assigned to another request
    pub fn master_code_taken(
        &self,
        code: &str,
        exclude_id: Option<RequestId>,
    ) -> Result<bool, MatreqError> {
        let data = self
            .data
            .read()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let code = code.trim();
        Ok(data.values().any(|r| {
            Some(r.id) != exclude_id && r.master_code().as_deref() == Some(code)
        }))
    }

    /// Count requests
    pub fn count(&self) -> Result<usize, MatreqError> {
        let data = self
            .data
            .read()
            .map_err(|e| MatreqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }

    fn restore(&self, id: RequestId, previous: Option<Request>) -> Result<(), MatreqError> {
        match previous {
            Some(request) => self.upsert(request),
            None => self.delete(id).map(|_| ()),
        }
    }
}

fn sort_newest_first(requests: &mut [Request]) {
    requests.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
    });
}
