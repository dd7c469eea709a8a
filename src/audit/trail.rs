//! Best-effort audit trail
//!
//! Recording never fails the operation that triggered it: a write error is
//! logged and dropped so the primary mutation stays available.

use tracing::warn;

use crate::error::MatreqResult;
use crate::models::RequestId;

use super::entry::{ActionKind, AuditEvent};
use super::logger::AuditLogger;

/// Records and lists the audit events of requests
pub struct AuditTrail<'a> {
    logger: &'a AuditLogger,
}

impl<'a> AuditTrail<'a> {
    pub fn new(logger: &'a AuditLogger) -> Self {
        Self { logger }
    }

    /// Append one event; returns whether it was persisted
    pub fn record(
        &self,
        request_id: RequestId,
        actor: &str,
        action: ActionKind,
        field_label: &str,
        old_value: &str,
        new_value: &str,
    ) -> bool {
        let event = AuditEvent::new(request_id, actor, action, field_label, old_value, new_value);

        match self.logger.log(&event) {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    request = %request_id,
                    action = %action,
                    field = field_label,
                    error = %e,
                    "audit event was not recorded"
                );
                false
            }
        }
    }

    /// Events of a request, newest first
    pub fn list(&self, request_id: RequestId) -> MatreqResult<Vec<AuditEvent>> {
        let mut events = self.logger.read_for(request_id)?;
        events.reverse();
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_is_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let trail = AuditTrail::new(&logger);
        let id = RequestId::new();

        assert!(trail.record(id, "kim", ActionKind::Create, "Status", "(empty)", "Requested"));
        assert!(trail.record(id, "kim", ActionKind::StatusChange, "Status", "Requested", "Review"));

        let events = trail.list(id).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].action, ActionKind::StatusChange);
        assert_eq!(events[1].action, ActionKind::Create);
    }

    #[test]
    fn test_record_failure_is_absorbed() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let logger = AuditLogger::new(blocker.join("audit.log"));
        let trail = AuditTrail::new(&logger);

        assert!(!trail.record(RequestId::new(), "kim", ActionKind::Update, "Plant", "1000", "2000"));
    }
}
