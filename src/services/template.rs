//! Template cloning
//!
//! Seeds a new request from an existing one, optionally replacing a literal
//! piece of text in every free-text attribute.

use crate::error::{MatreqError, MatreqResult};
use crate::models::{AttrValue, Request, Snapshot};
use crate::schema::{self, AttrKey};
use crate::storage::Storage;

use super::request::RequestService;

/// Requests that may serve as a template
///
/// Requests under review or rejected are never offered.
pub fn list_cloneable(requests: &[Request]) -> Vec<&Request> {
    requests.iter().filter(|r| r.status.is_cloneable()).collect()
}

/// Copy a snapshot for use as the seed of a new request
///
/// Every value is copied. When `find` is non-empty, each occurrence of it in a text value of a non-fixed attribute is
/// replaced with `replace` (an absent replacement deletes the text).
pub fn clone_snapshot(
    source: &Snapshot,
    find: Option<&str>,
    replace: Option<&str>,
) -> MatreqResult<Snapshot> {
    let mut snapshot = source.clone();

    if let Some(find) = find.filter(|f| !f.is_empty()) {
        let replace = replace.unwrap_or("");
        for (key, value) in snapshot.values_mut() {
            if schema::is_fixed(key) {
                continue;
            }
            if let AttrValue::Text(text) = value {
                if text.contains(find) {
                    *text = text.replace(find, replace);
                }
            }
        }
    }

    snapshot.validate()?;
    Ok(snapshot)
}

/// Template operations against the store
pub struct TemplateService<'a> {
    storage: &'a Storage,
}

impl<'a> TemplateService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Stored requests that may serve as a template, newest first
    pub fn cloneable(&self) -> MatreqResult<Vec<Request>> {
        let requests = self.storage.requests.get_all()?;
        Ok(list_cloneable(&requests).into_iter().cloned().collect())
    }

    /// Build a seed snapshot from the request named by `identifier`
    pub fn seed(
        &self,
        identifier: &str,
        find: Option<&str>,
        replace: Option<&str>,
    ) -> MatreqResult<Snapshot> {
        let source = RequestService::new(self.storage).resolve(identifier)?;

        if !source.status.is_cloneable() {
            return Err(MatreqError::Validation(format!(
                "Request {} is in {} status and cannot be used as a template",
                source.id, source.status
            )));
        }

        // Master codes are unique per record
        let mut seed = clone_snapshot(&source.snapshot, find, replace)?;
        seed.remove(AttrKey::Matnr);
        Ok(seed)
    }

    /// Seed a snapshot from a template, lay `overrides` on top and submit it
    pub fn create_from(
        &self,
        identifier: &str,
        find: Option<&str>,
        replace: Option<&str>,
        overrides: &Snapshot,
        requester: &str,
    ) -> MatreqResult<Request> {
        let seed = self.seed(identifier, find, replace)?.merged(overrides);
        RequestService::new(self.storage).create(&seed, requester)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::MatreqPaths;
    use crate::models::RequestStatus;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = MatreqPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn ramen() -> Snapshot {
        let mut snapshot = Snapshot::with_defaults();
        snapshot.set(AttrKey::Matnr, "100200");
        snapshot.set(AttrKey::Maktx, "얼큰한맛 라면");
        snapshot.set(AttrKey::MaktxEn, "Spicy Ramen");
        snapshot.set(AttrKey::Zzflavor, "얼큰한맛");
        snapshot.set(AttrKey::Brgew, 0.12);
        snapshot
    }

    #[test]
    fn test_clone_with_substitution() {
        let source = ramen();
        let cloned = clone_snapshot(&source, Some("얼큰한맛"), Some("순한맛")).unwrap();

        assert_eq!(cloned.value(AttrKey::Maktx).trimmed(), "순한맛 라면");
        assert_eq!(cloned.value(AttrKey::Zzflavor).trimmed(), "순한맛");
        assert_eq!(cloned.value(AttrKey::MaktxEn), source.value(AttrKey::MaktxEn));
        assert_eq!(cloned.value(AttrKey::Brgew), &AttrValue::Number(0.12));
    }

    #[test]
    fn test_clone_without_find_copies_values() {
        let source = ramen();
        let cloned = clone_snapshot(&source, None, Some("ignored")).unwrap();

        assert_eq!(cloned, source);
    }

    #[test]
    fn test_clone_empty_find_is_noop() {
        let source = ramen();
        let cloned = clone_snapshot(&source, Some(""), Some("x")).unwrap();
        assert_eq!(cloned.value(AttrKey::Maktx).trimmed(), "얼큰한맛 라면");
    }

    #[test]
    fn test_seed_drops_master_code() {
        let (_temp_dir, storage) = create_test_storage();
        let source = RequestService::new(&storage).create(&ramen(), "kim").unwrap();

        let seed = TemplateService::new(&storage)
            .seed(&source.id.to_string(), None, None)
            .unwrap();
        assert!(seed.master_code().is_none());
        assert_eq!(seed.value(AttrKey::Maktx), source.snapshot.value(AttrKey::Maktx));
    }

    #[test]
    fn test_clone_replaces_every_occurrence() {
        let mut source = Snapshot::new();
        source.set(AttrKey::Maktx, "a-a-a");
        let cloned = clone_snapshot(&source, Some("a"), Some("b")).unwrap();
        assert_eq!(cloned.value(AttrKey::Maktx).trimmed(), "b-b-b");
    }

    #[test]
    fn test_clone_leaves_fixed_attributes_alone() {
        let source = Snapshot::with_defaults();
        let cloned = clone_snapshot(&source, Some("ZMAT"), Some("XXX")).unwrap();
        assert_eq!(cloned.value(AttrKey::Class).trimmed(), "ZMAT_FOOD");
    }

    #[test]
    fn test_clone_result_is_validated() {
        let mut source = Snapshot::new();
        source.set(AttrKey::Meins, "EA");
        let result = clone_snapshot(&source, Some("EA"), Some("EACH"));
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_list_cloneable_excludes_review_and_reject() {
        let statuses = [
            RequestStatus::Requested,
            RequestStatus::Review,
            RequestStatus::Approved,
            RequestStatus::Reject,
            RequestStatus::Done,
        ];
        let requests: Vec<_> = statuses
            .iter()
            .map(|status| {
                let mut request = Request::new(Snapshot::new(), "kim");
                request.status = *status;
                request
            })
            .collect();

        let cloneable: Vec<_> = list_cloneable(&requests).iter().map(|r| r.status).collect();
        assert_eq!(
            cloneable,
            vec![
                RequestStatus::Requested,
                RequestStatus::Approved,
                RequestStatus::Done
            ]
        );
    }

    #[test]
    fn test_seed_refuses_request_under_review() {
        let (_temp_dir, storage) = create_test_storage();
        let requests = RequestService::new(&storage);
        let source = requests.create(&ramen(), "kim").unwrap();
        requests
            .transition_status(source.id, RequestStatus::Review, "lee")
            .unwrap();

        let templates = TemplateService::new(&storage);
        assert!(templates.cloneable().unwrap().is_empty());
        let result = templates.seed(&source.id.to_string(), None, None);
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_create_from_template() {
        let (_temp_dir, storage) = create_test_storage();
        let requests = RequestService::new(&storage);
        let source = requests.create(&ramen(), "kim").unwrap();

        let mut overrides = Snapshot::new();
        overrides.set(AttrKey::Matnr, "100201");

        let templates = TemplateService::new(&storage);
        let created = templates
            .create_from(
                &source.id.to_string(),
                Some("얼큰한맛"),
                Some("순한맛"),
                &overrides,
                "lee",
            )
            .unwrap();

        assert_ne!(created.id, source.id);
        assert_eq!(created.status, RequestStatus::Requested);
        assert_eq!(created.requester, "lee");
        assert_eq!(created.master_code().as_deref(), Some("100201"));
        assert_eq!(created.snapshot.value(AttrKey::Maktx).trimmed(), "순한맛 라면");
        assert!(requests.comments(created.id).unwrap().is_empty());
    }
}
