//! Audit event data structures
//!
//! Defines the action kinds and the event format itself. Events are
//! immutable once written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AuditEventId, RequestId};

/// Kinds of actions that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    /// Request was created
    Create,
    /// An attribute was corrected
    Update,
    /// The workflow status changed
    StatusChange,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Create => write!(f, "CREATE"),
            ActionKind::Update => write!(f, "UPDATE"),
            ActionKind::StatusChange => write!(f, "STATUS_CHANGE"),
        }
    }
}

/// A single audit event
///
/// Records one field-level or status-level change of a request, with the
/// displayed old and new values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Unique identifier
    pub id: AuditEventId,

    /// Request the event belongs to
    pub request_id: RequestId,

    /// Who made the change
    pub actor: String,

    /// Type of action performed
    pub action: ActionKind,

    /// Label of the changed field
    pub field_label: String,

    /// Displayed value before the change
    pub old_value: String,

    /// Displayed value after the change
    pub new_value: String,

    /// When the change happened (UTC)
    pub timestamp: DateTime<Utc>,
}

impl AuditEvent {
    /// Create a new event stamped with the current time
    pub fn new(
        request_id: RequestId,
        actor: impl Into<String>,
        action: ActionKind,
        field_label: impl Into<String>,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
    ) -> Self {
        Self {
            id: AuditEventId::new(),
            request_id,
            actor: actor.into(),
            action,
            field_label: field_label.into(),
            old_value: old_value.into(),
            new_value: new_value.into(),
            timestamp: Utc::now(),
        }
    }

    /// Format the event for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} {} by {}: {} → {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.action,
            self.field_label,
            self.actor,
            self.old_value,
            self.new_value
        )
    }
}
