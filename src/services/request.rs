//! Request service
//!
//! The request lifecycle: creation, attribute updates with field-level
//! auditing, status transitions, comments and deletion.

use chrono::Utc;
use tracing::{info, warn};

use crate::audit::{diff_snapshots, summarize, ActionKind, AuditEvent, FieldChange, BLANK_PLACEHOLDER};
use crate::error::{MatreqError, MatreqResult};
use crate::models::{Comment, Request, RequestId, RequestStatus, Snapshot};
use crate::schema::{self, AttrKey, FieldKind};
use crate::storage::Storage;

/// Field label used for status events
pub const STATUS_FIELD: &str = "Status";

/// Result of a successful update
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    /// The request as persisted
    pub request: Request,
    /// Corrections detected against the previously stored snapshot
    pub changes: Vec<FieldChange>,
    /// Required attributes that are still blank
    pub missing_required: Vec<AttrKey>,
}

impl UpdateOutcome {
    /// Whether every required attribute is filled
    pub fn is_complete(&self) -> bool {
        self.missing_required.is_empty()
    }
}

/// Service for request management
pub struct RequestService<'a> {
    storage: &'a Storage,
}

impl<'a> RequestService<'a> {
    /// Create a new request service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Submit a new request
    ///
    /// Absent attributes receive their schema defaults. Required attributes
    /// may still be blank; they are completed by later updates.
    pub fn create(&self, snapshot: &Snapshot, requester: &str) -> MatreqResult<Request> {
        let requester = non_empty(requester, "Requester name")?;

        snapshot.validate()?;
        self.check_hierarchy_codes(snapshot)?;

        let mut snapshot = snapshot.clone();
        snapshot.fill_defaults();

        if let Some(code) = snapshot.master_code() {
            if self.storage.requests.master_code_taken(&code, None)? {
                return Err(MatreqError::duplicate_master_code(code));
            }
        }

        let request = Request::new(snapshot, requester);
        self.storage.requests.commit(request.clone())?;

        self.storage.audit().record(
            request.id,
            requester,
            ActionKind::Create,
            STATUS_FIELD,
            BLANK_PLACEHOLDER,
            &request.status.to_string(),
        );

        let missing = request.snapshot.missing_required();
        if !missing.is_empty() {
            warn!(request = %request.id, missing = missing.len(), "created with required attributes unset");
        }

        info!(request = %request.id, requester, "created request");
        Ok(request)
    }

    /// Apply a partial snapshot to a stored request
    ///
    /// The stored snapshot is diffed against the merged one, the merged
    /// snapshot is persisted, and each correction is audited. When
    /// `expected_version` is given the update is refused if the stored
    /// request has moved on.
    pub fn update(
        &self,
        id: RequestId,
        partial: &Snapshot,
        actor: &str,
        expected_version: Option<u64>,
    ) -> MatreqResult<UpdateOutcome> {
        let actor = non_empty(actor, "Actor name")?;

        let stored = self
            .storage
            .requests
            .get(id)?
            .ok_or_else(|| MatreqError::request_not_found(id.to_string()))?;

        if let Some(expected) = expected_version {
            if expected != stored.version {
                return Err(MatreqError::Conflict {
                    expected,
                    actual: stored.version,
                });
            }
        }

        partial.validate()?;
        self.check_hierarchy_codes(partial)?;

        let merged = stored.snapshot.merged(partial);

        if let Some(code) = merged.master_code() {
            if self.storage.requests.master_code_taken(&code, Some(id))? {
                return Err(MatreqError::duplicate_master_code(code));
            }
        }

        let changes = diff_snapshots(&stored.snapshot, &merged);

        let mut updated = stored;
        updated.snapshot = merged;
        updated.touch();
        self.storage.requests.commit(updated.clone())?;

        let trail = self.storage.audit();
        for change in &changes {
            trail.record(
                id,
                actor,
                ActionKind::Update,
                change.label,
                &change.old_display,
                &change.new_display,
            );
        }

        if let Some(summary) = summarize(&changes) {
            self.append_best_effort(Comment::change_summary(id, actor, summary));
        }

        let missing_required = updated.snapshot.missing_required();
        if !missing_required.is_empty() {
            warn!(request = %id, missing = missing_required.len(), "required attributes unset after update");
            self.append_best_effort(Comment::warning(id, missing_message(&missing_required)));
        }

        info!(request = %id, actor, changes = changes.len(), version = updated.version, "updated request");

        Ok(UpdateOutcome {
            request: updated,
            changes,
            missing_required,
        })
    }

    /// Move a request to another status
    ///
    /// Moving to the current status succeeds without recording anything.
    pub fn transition_status(
        &self,
        id: RequestId,
        status: RequestStatus,
        actor: &str,
    ) -> MatreqResult<Request> {
        let actor = non_empty(actor, "Actor name")?;

        if status.is_legacy() {
            return Err(MatreqError::Validation(format!(
                "'{}' is a legacy status and cannot be set",
                status
            )));
        }

        let mut request = self
            .storage
            .requests
            .get(id)?
            .ok_or_else(|| MatreqError::request_not_found(id.to_string()))?;

        if request.status == status {
            return Ok(request);
        }

        let previous = request.status;
        request.status = status;
        if status.is_approval() {
            request.completed_at = Some(Utc::now());
        }
        request.touch();

        self.storage.requests.commit(request.clone())?;

        self.storage.audit().record(
            id,
            actor,
            ActionKind::StatusChange,
            STATUS_FIELD,
            &previous.to_string(),
            &status.to_string(),
        );

        info!(request = %id, actor, from = %previous, to = %status, "changed request status");
        Ok(request)
    }

    /// Delete a request with its comments and audit events
    pub fn delete(&self, id: RequestId) -> MatreqResult<Request> {
        let request = self
            .storage
            .requests
            .get(id)?
            .ok_or_else(|| MatreqError::request_not_found(id.to_string()))?;

        if !self.storage.delete_request(id)? {
            return Err(MatreqError::request_not_found(id.to_string()));
        }

        Ok(request)
    }

    /// Add a free-text note to a request; notes are not audited
    pub fn add_comment(&self, id: RequestId, message: &str, writer: &str) -> MatreqResult<Comment> {
        let writer = non_empty(writer, "Writer name")?;
        let message = non_empty(message, "Comment")?;

        if !self.storage.requests.exists(id)? {
            return Err(MatreqError::request_not_found(id.to_string()));
        }

        let comment = Comment::note(id, writer, message);
        self.storage.comments.append(comment.clone())?;
        Ok(comment)
    }

    /// Get a request by ID
    pub fn get(&self, id: RequestId) -> MatreqResult<Option<Request>> {
        self.storage.requests.get(id)
    }

    /// Find a request by full UUID or short display ID
    pub fn find(&self, identifier: &str) -> MatreqResult<Option<Request>> {
        self.storage.requests.find(identifier)
    }

    /// Find a request, failing with NotFound if there is none
    pub fn resolve(&self, identifier: &str) -> MatreqResult<Request> {
        self.find(identifier)?
            .ok_or_else(|| MatreqError::request_not_found(identifier.trim()))
    }

    /// All requests, newest first, optionally limited to one status
    pub fn list(&self, status: Option<RequestStatus>) -> MatreqResult<Vec<Request>> {
        let requests = self.storage.requests.get_all()?;
        Ok(match status {
            Some(status) => requests.into_iter().filter(|r| r.status == status).collect(),
            None => requests,
        })
    }

    /// Comments of a request, oldest first
    pub fn comments(&self, id: RequestId) -> MatreqResult<Vec<Comment>> {
        self.storage.comments.get_for(id)
    }

    /// Audit events of a request, newest first
    pub fn history(&self, id: RequestId) -> MatreqResult<Vec<AuditEvent>> {
        self.storage.audit().list(id)
    }

    /// Hierarchy-kind attributes must name a leaf node once a hierarchy is installed
    fn check_hierarchy_codes(&self, snapshot: &Snapshot) -> MatreqResult<()> {
        if self.storage.hierarchy.is_empty()? {
            return Ok(());
        }

        for (key, value) in snapshot.iter() {
            if !matches!(schema::kind(key), FieldKind::Hierarchy) || value.is_blank() {
                continue;
            }

            let code = value.trimmed();
            if !self.storage.hierarchy.is_leaf_code(&code)? {
                return Err(MatreqError::Validation(format!(
                    "{} ({}): '{}' is not a level-4 hierarchy code",
                    schema::label(key),
                    key,
                    code
                )));
            }
        }

        Ok(())
    }

    fn append_best_effort(&self, comment: Comment) {
        let request_id = comment.request_id;
        let kind = comment.kind;
        if let Err(e) = self.storage.comments.append(comment) {
            warn!(request = %request_id, kind = %kind, error = %e, "comment was not recorded");
        }
    }
}

fn non_empty<'s>(value: &'s str, what: &str) -> MatreqResult<&'s str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(MatreqError::Validation(format!("{} cannot be empty", what)));
    }
    Ok(value)
}

fn missing_message(missing: &[AttrKey]) -> String {
    let items: Vec<String> = missing
        .iter()
        .map(|key| format!("{} ({})", schema::label(*key), key))
        .collect();
    format!("Required attributes missing: {}", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::MatreqPaths;
    use crate::models::{AttrValue, CommentKind, HierarchyNode};
    use crate::storage::write_json_atomic;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = MatreqPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn ramen() -> Snapshot {
        let mut snapshot = Snapshot::new();
        snapshot.set(AttrKey::Mtart, "FERT");
        snapshot.set(AttrKey::Maktx, "얼큰한맛 라면");
        snapshot.set(AttrKey::Meins, "EA");
        snapshot
    }

    fn complete_snapshot() -> Snapshot {
        let mut snapshot = Snapshot::with_defaults();
        for key in schema::required_keys() {
            if snapshot.value(key).is_blank() {
                let value = match schema::permitted_values(key) {
                    Some(values) => values[0].to_string(),
                    None => "1000".to_string(),
                };
                snapshot.set(key, AttrValue::Text(value));
            }
        }
        snapshot
    }

    fn partial(entries: &[(AttrKey, &str)]) -> Snapshot {
        entries
            .iter()
            .map(|(k, v)| (*k, AttrValue::text(*v)))
            .collect()
    }

    #[test]
    fn test_create_records_one_event_and_no_comments() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);

        let request = service.create(&ramen(), "kim").unwrap();

        assert_eq!(request.status, RequestStatus::Requested);
        assert_eq!(request.version, 1);
        let history = service.history(request.id).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].action, ActionKind::Create);
        assert_eq!(history[0].old_value, BLANK_PLACEHOLDER);
        assert_eq!(history[0].new_value, "Requested");
        assert!(service.comments(request.id).unwrap().is_empty());
    }

    #[test]
    fn test_create_fills_defaults() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);

        let request = service.create(&ramen(), "kim").unwrap();
        assert_eq!(request.snapshot.value(AttrKey::Class).trimmed(), "ZMAT_FOOD");
        assert_eq!(request.snapshot.value(AttrKey::Werks).trimmed(), "1000");
        assert_eq!(request.snapshot.value(AttrKey::Maktx).trimmed(), "얼큰한맛 라면");
    }

    #[test]
    fn test_create_rejects_invalid_snapshot() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);

        let mut snapshot = ramen();
        snapshot.set(AttrKey::Mtart, "BOGUS");
        assert!(service.create(&snapshot, "kim").unwrap_err().is_validation());
        assert!(service.create(&ramen(), "  ").unwrap_err().is_validation());
        assert!(service.list(None).unwrap().is_empty());
    }

    #[test]
    fn test_create_rejects_duplicate_master_code() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);

        let mut snapshot = ramen();
        snapshot.set(AttrKey::Matnr, "100200");
        service.create(&snapshot, "kim").unwrap();

        let result = service.create(&snapshot, "lee");
        assert!(matches!(result, Err(MatreqError::Duplicate { .. })));
        assert_eq!(service.list(None).unwrap().len(), 1);
    }

    #[test]
    fn test_update_audits_each_correction_and_one_summary() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);
        let request = service.create(&ramen(), "kim").unwrap();

        let outcome = service
            .update(
                request.id,
                &partial(&[
                    (AttrKey::Maktx, "순한맛 라면"),
                    (AttrKey::Meins, "BOX"),
                    (AttrKey::Bismt, "OLD-1"),
                ]),
                "lee",
                None,
            )
            .unwrap();

        // BISMT went from blank to filled, which is not a correction
        assert_eq!(outcome.changes.len(), 2);
        assert_eq!(outcome.request.version, 2);

        let history = service.history(request.id).unwrap();
        let updates: Vec<_> = history
            .iter()
            .filter(|e| e.action == ActionKind::Update)
            .collect();
        assert_eq!(updates.len(), 2);
        assert!(updates.iter().all(|e| e.actor == "lee"));

        let summaries: Vec<_> = service
            .comments(request.id)
            .unwrap()
            .into_iter()
            .filter(|c| c.kind == CommentKind::ChangeSummary)
            .collect();
        assert_eq!(summaries.len(), 1);
        assert!(summaries[0].message.starts_with("2 items changed: "));
        assert!(summaries[0].message.contains("얼큰한맛 라면 → 순한맛 라면"));
        assert!(summaries[0].message.contains("EA → BOX"));
    }

    #[test]
    fn test_update_without_changes_writes_no_events_or_summary() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);
        let request = service.create(&complete_snapshot(), "kim").unwrap();

        let outcome = service
            .update(request.id, &Snapshot::new(), "lee", None)
            .unwrap();

        assert!(outcome.changes.is_empty());
        assert!(outcome.is_complete());
        assert_eq!(outcome.request.version, 2);
        assert_eq!(service.history(request.id).unwrap().len(), 1);
        assert!(service.comments(request.id).unwrap().is_empty());
    }

    #[test]
    fn test_update_reports_missing_required_as_warning() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);
        let request = service.create(&ramen(), "kim").unwrap();

        let outcome = service
            .update(request.id, &partial(&[(AttrKey::Maktx, "순한맛 라면")]), "lee", None)
            .unwrap();

        assert!(!outcome.is_complete());
        assert!(outcome.missing_required.contains(&AttrKey::Matkl));
        assert!(!outcome.missing_required.contains(&AttrKey::Maktx));

        let comments = service.comments(request.id).unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].kind, CommentKind::ChangeSummary);
        assert_eq!(comments[1].kind, CommentKind::Warning);
        assert!(comments[1].message.contains("MATKL"));
    }

    #[test]
    fn test_update_correction_to_blank_is_reported() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);
        let request = service.create(&ramen(), "kim").unwrap();

        let outcome = service
            .update(request.id, &partial(&[(AttrKey::Meins, "")]), "lee", None)
            .unwrap();

        assert_eq!(outcome.changes.len(), 1);
        assert_eq!(outcome.changes[0].new_display, BLANK_PLACEHOLDER);
    }

    #[test]
    fn test_update_unknown_request() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);

        let result = service.update(RequestId::new(), &Snapshot::new(), "lee", None);
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_update_version_conflict() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);
        let request = service.create(&ramen(), "kim").unwrap();

        service
            .update(request.id, &partial(&[(AttrKey::Bismt, "A")]), "kim", Some(1))
            .unwrap();

        let result = service.update(request.id, &partial(&[(AttrKey::Bismt, "B")]), "lee", Some(1));
        assert!(matches!(
            result,
            Err(MatreqError::Conflict {
                expected: 1,
                actual: 2
            })
        ));

        let stored = service.get(request.id).unwrap().unwrap();
        assert_eq!(stored.snapshot.value(AttrKey::Bismt).trimmed(), "A");
    }

    #[test]
    fn test_update_rejects_fixed_attribute_edit() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);
        let request = service.create(&ramen(), "kim").unwrap();

        let result = service.update(request.id, &partial(&[(AttrKey::Klart, "300")]), "lee", None);
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_update_rejects_clearing_fixed_attribute() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);
        let request = service.create(&ramen(), "kim").unwrap();

        let mut cleared = Snapshot::new();
        cleared.set(AttrKey::Class, AttrValue::Blank);
        let result = service.update(request.id, &cleared, "lee", None);
        assert!(result.unwrap_err().is_validation());

        let stored = service.get(request.id).unwrap().unwrap();
        assert_eq!(stored.snapshot.value(AttrKey::Class).trimmed(), "ZMAT_FOOD");
        assert_eq!(stored.version, request.version);
        assert_eq!(service.history(request.id).unwrap().len(), 1);
    }

    #[test]
    fn test_update_rejects_duplicate_master_code() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);

        let mut first = ramen();
        first.set(AttrKey::Matnr, "100200");
        service.create(&first, "kim").unwrap();
        let second = service.create(&ramen(), "kim").unwrap();

        let result = service.update(second.id, &partial(&[(AttrKey::Matnr, "100200")]), "lee", None);
        assert!(matches!(result, Err(MatreqError::Duplicate { .. })));
    }

    #[test]
    fn test_transition_to_same_status_is_noop() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);
        let request = service.create(&ramen(), "kim").unwrap();

        let unchanged = service
            .transition_status(request.id, RequestStatus::Requested, "lee")
            .unwrap();

        assert_eq!(unchanged.version, 1);
        assert_eq!(service.history(request.id).unwrap().len(), 1);
    }

    #[test]
    fn test_transition_to_approved_stamps_completion() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);
        let request = service.create(&ramen(), "kim").unwrap();

        service
            .transition_status(request.id, RequestStatus::Review, "lee")
            .unwrap();
        let approved = service
            .transition_status(request.id, RequestStatus::Approved, "lee")
            .unwrap();

        assert!(approved.completed_at.is_some());

        let history = service.history(request.id).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].action, ActionKind::StatusChange);
        assert_eq!(history[0].old_value, "Review");
        assert_eq!(history[0].new_value, "Approved");
    }

    #[test]
    fn test_approved_is_not_terminal() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);
        let request = service.create(&ramen(), "kim").unwrap();

        service
            .transition_status(request.id, RequestStatus::Approved, "lee")
            .unwrap();
        let reopened = service
            .transition_status(request.id, RequestStatus::Review, "lee")
            .unwrap();

        assert_eq!(reopened.status, RequestStatus::Review);
        assert!(reopened.completed_at.is_some());
    }

    #[test]
    fn test_transition_to_legacy_status_is_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);
        let request = service.create(&ramen(), "kim").unwrap();

        let result = service.transition_status(request.id, RequestStatus::Done, "lee");
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_transition_unknown_request() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);

        let result = service.transition_status(RequestId::new(), RequestStatus::Review, "lee");
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_add_comment_is_not_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);
        let request = service.create(&ramen(), "kim").unwrap();

        let comment = service.add_comment(request.id, "please check", "lee").unwrap();
        assert_eq!(comment.kind, CommentKind::Note);
        assert_eq!(service.comments(request.id).unwrap().len(), 1);
        assert_eq!(service.history(request.id).unwrap().len(), 1);

        assert!(service.add_comment(request.id, "   ", "lee").unwrap_err().is_validation());
        assert!(service
            .add_comment(RequestId::new(), "hi", "lee")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_delete_cascades() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);
        let request = service.create(&ramen(), "kim").unwrap();
        service.add_comment(request.id, "note", "lee").unwrap();

        service.delete(request.id).unwrap();

        assert!(service.list(None).unwrap().is_empty());
        assert!(service.comments(request.id).unwrap().is_empty());
        assert!(service.history(request.id).unwrap().is_empty());
        assert!(service.delete(request.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_filters_by_status() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);
        let a = service.create(&ramen(), "kim").unwrap();
        service.create(&ramen(), "kim").unwrap();

        service
            .transition_status(a.id, RequestStatus::Approved, "lee")
            .unwrap();

        assert_eq!(service.list(None).unwrap().len(), 2);
        let approved = service.list(Some(RequestStatus::Approved)).unwrap();
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].id, a.id);
    }

    #[test]
    fn test_resolve_by_short_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);
        let request = service.create(&ramen(), "kim").unwrap();

        assert_eq!(service.resolve(&request.id.to_string()).unwrap().id, request.id);
        assert!(service.resolve("req-00000000").is_err());
    }

    #[test]
    fn test_audit_failure_does_not_fail_the_mutation() {
        let (_temp_dir, storage) = create_test_storage();
        std::fs::create_dir_all(storage.paths().audit_log()).unwrap();
        let service = RequestService::new(&storage);

        let request = service.create(&ramen(), "kim").unwrap();
        let outcome = service
            .update(request.id, &partial(&[(AttrKey::Maktx, "순한맛 라면")]), "lee", None)
            .unwrap();

        assert_eq!(outcome.changes.len(), 1);
        assert_eq!(service.list(None).unwrap().len(), 1);
    }

    #[test]
    fn test_store_failure_leaves_no_trace() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RequestService::new(&storage);
        let request = service.create(&ramen(), "kim").unwrap();

        let blocker = storage.paths().requests_file().with_extension("json.tmp");
        std::fs::create_dir_all(&blocker).unwrap();

        let result = service.update(request.id, &partial(&[(AttrKey::Maktx, "순한맛 라면")]), "lee", None);
        assert!(result.unwrap_err().is_storage());

        let stored = service.get(request.id).unwrap().unwrap();
        assert_eq!(stored.version, 1);
        assert_eq!(stored.snapshot.value(AttrKey::Maktx).trimmed(), "얼큰한맛 라면");
        assert_eq!(service.history(request.id).unwrap().len(), 1);
        assert!(service.comments(request.id).unwrap().is_empty());

        let created = service.create(&ramen(), "kim");
        assert!(created.unwrap_err().is_storage());
        assert_eq!(service.list(None).unwrap().len(), 1);
    }

    #[test]
    fn test_hierarchy_codes_must_be_leaves() {
        let (_temp_dir, mut storage) = create_test_storage();
        write_json_atomic(
            storage.paths().hierarchy_file(),
            &serde_json::json!({
                "nodes": [
                    HierarchyNode::new(1, "10", "Food", None),
                    HierarchyNode::new(2, "1010", "Noodles", Some("10")),
                    HierarchyNode::new(3, "101010", "Instant", Some("1010")),
                    HierarchyNode::new(4, "10101001", "Cup Ramen", Some("101010")),
                ]
            }),
        )
        .unwrap();
        storage.load_all().unwrap();
        let service = RequestService::new(&storage);

        let mut snapshot = ramen();
        snapshot.set(AttrKey::Prdha, "1010");
        assert!(service.create(&snapshot, "kim").unwrap_err().is_validation());

        snapshot.set(AttrKey::Prdha, "10101001");
        assert!(service.create(&snapshot, "kim").is_ok());
    }
}
