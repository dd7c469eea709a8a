//! Request comments
//!
//! Comments are kept oldest-first per request. Besides free-form notes, the
//! lifecycle writes change summaries and missing-field warnings here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CommentId, RequestId};

/// Writer name used for comments the system generates on its own behalf
pub const SYSTEM_WRITER: &str = "system";

/// Origin of a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CommentKind {
    /// Written by a person
    #[default]
    Note,
    /// Synthesized summary of the changes made by one update
    ChangeSummary,
    /// Required attributes were left blank
    Warning,
}

impl fmt::Display for CommentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Note => write!(f, "note"),
            Self::ChangeSummary => write!(f, "changes"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A comment on a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub request_id: RequestId,
    pub writer: String,
    pub message: String,
    #[serde(default)]
    pub kind: CommentKind,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    fn with_kind(
        request_id: RequestId,
        writer: impl Into<String>,
        message: impl Into<String>,
        kind: CommentKind,
    ) -> Self {
        Self {
            id: CommentId::new(),
            request_id,
            writer: writer.into(),
            message: message.into(),
            kind,
            created_at: Utc::now(),
        }
    }

    /// A note written by a person
    pub fn note(request_id: RequestId, writer: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_kind(request_id, writer, message, CommentKind::Note)
    }

    /// A change summary attributed to the actor of the update
    pub fn change_summary(
        request_id: RequestId,
        writer: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::with_kind(request_id, writer, message, CommentKind::ChangeSummary)
    }

    /// A system warning
    pub fn warning(request_id: RequestId, message: impl Into<String>) -> Self {
        Self::with_kind(request_id, SYSTEM_WRITER, message, CommentKind::Warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        let id = RequestId::new();
        assert_eq!(Comment::note(id, "lee", "hi").kind, CommentKind::Note);
        assert_eq!(
            Comment::change_summary(id, "lee", "1 items changed").kind,
            CommentKind::ChangeSummary
        );

        let warning = Comment::warning(id, "missing");
        assert_eq!(warning.kind, CommentKind::Warning);
        assert_eq!(warning.writer, SYSTEM_WRITER);
    }

    #[test]
    fn test_kind_defaults_to_note_on_old_data() {
        let id = RequestId::new();
        let json = format!(
            r#"{{"id":"{}","request_id":"{}","writer":"lee","message":"m","created_at":"2025-01-01T00:00:00Z"}}"#,
            CommentId::new().as_uuid(),
            id.as_uuid()
        );
        let comment: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(comment.kind, CommentKind::Note);
    }
}
