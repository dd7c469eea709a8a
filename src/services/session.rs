//! Working session
//!
//! Holds who is acting and which request is selected for the lifetime of
//! one command. Built by `start`, torn down by `end`.

use tracing::{debug, info};

use crate::error::{MatreqError, MatreqResult};
use crate::models::{Request, RequestId};
use crate::storage::Storage;

use super::request::RequestService;
use super::template::TemplateService;

/// Current user and selection over an open store
pub struct Session<'a> {
    storage: &'a Storage,
    user: String,
    selected: Option<RequestId>,
}

impl<'a> Session<'a> {
    /// Open a session for `user`
    pub fn start(storage: &'a Storage, user: &str) -> MatreqResult<Self> {
        let user = user.trim();
        if user.is_empty() {
            return Err(MatreqError::Validation(
                "A user name is required (use --user or set MATREQ_USER)".into(),
            ));
        }

        debug!(user, "session started");
        Ok(Self {
            storage,
            user: user.to_string(),
            selected: None,
        })
    }

    /// Name recorded as actor, requester or writer
    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn storage(&self) -> &'a Storage {
        self.storage
    }

    pub fn requests(&self) -> RequestService<'a> {
        RequestService::new(self.storage)
    }

    pub fn templates(&self) -> TemplateService<'a> {
        TemplateService::new(self.storage)
    }

    /// Select the request named by `identifier`
    pub fn select(&mut self, identifier: &str) -> MatreqResult<Request> {
        let request = self.requests().resolve(identifier)?;
        self.selected = Some(request.id);
        Ok(request)
    }

    /// The selected request as currently stored
    pub fn selected(&self) -> MatreqResult<Option<Request>> {
        match self.selected {
            Some(id) => self.requests().get(id),
            None => Ok(None),
        }
    }

    /// The selected request, failing if nothing is selected
    pub fn require_selected(&self) -> MatreqResult<Request> {
        let id = self
            .selected
            .ok_or_else(|| MatreqError::Validation("No request selected".into()))?;
        self.requests()
            .get(id)?
            .ok_or_else(|| MatreqError::request_not_found(id.to_string()))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Close the session
    pub fn end(self) {
        info!(user = %self.user, "session ended");
    }
}
