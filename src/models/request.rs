//! Change-request model
//!
//! A request wraps a snapshot with its workflow status and bookkeeping
//! timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RequestId;
use super::snapshot::Snapshot;

/// Workflow status of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RequestStatus {
    /// Submitted, waiting for review
    #[default]
    Requested,
    /// Under review by the data steward
    Review,
    /// Approved for export
    Approved,
    /// Rejected
    Reject,
    /// Legacy value found in old data; never produced by a transition
    Done,
}

impl RequestStatus {
    /// Statuses a request can be moved into
    pub const ACTIVE: &'static [RequestStatus] = &[
        RequestStatus::Requested,
        RequestStatus::Review,
        RequestStatus::Approved,
        RequestStatus::Reject,
    ];

    /// Parse a status from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "requested" | "request" => Some(Self::Requested),
            "review" => Some(Self::Review),
            "approved" | "approve" => Some(Self::Approved),
            "reject" | "rejected" => Some(Self::Reject),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Whether this status is the legacy `Done` value
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Whether this is the approval status (stamps `completed_at`)
    pub fn is_approval(&self) -> bool {
        matches!(self, Self::Approved)
    }

    /// Whether a request in this status may seed a new request
    ///
    /// In-flight and rejected data must not be propagated.
    pub fn is_cloneable(&self) -> bool {
        !matches!(self, Self::Review | Self::Reject)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Requested => write!(f, "Requested"),
            Self::Review => write!(f, "Review"),
            Self::Approved => write!(f, "Approved"),
            Self::Reject => write!(f, "Reject"),
            Self::Done => write!(f, "Done"),
        }
    }
}

/// A change-request against one master record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// Unique identifier
    pub id: RequestId,

    /// Workflow status
    #[serde(default)]
    pub status: RequestStatus,

    /// Name of the person who submitted the request
    pub requester: String,

    /// When the request was created
    pub created_at: DateTime<Utc>,

    /// When the request was last written
    pub updated_at: DateTime<Utc>,

    /// When the request was approved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    /// Incremented on every write; used for optimistic concurrency checks
    #[serde(default)]
    pub version: u64,

    /// Current attribute values
    #[serde(default)]
    pub snapshot: Snapshot,
}

impl Request {
    /// Create a new request in `Requested` status
    pub fn new(snapshot: Snapshot, requester: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: RequestId::new(),
            status: RequestStatus::Requested,
            requester: requester.into(),
            created_at: now,
            updated_at: now,
            completed_at: None,
            version: 1,
            snapshot,
        }
    }

    /// Record that the request was written
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.version += 1;
    }

    /// Assigned master code, if any
    pub fn master_code(&self) -> Option<String> {
        self.snapshot.master_code()
    }

    /// Short title for listings
    pub fn title(&self) -> String {
        let description = self.snapshot.description();
        if description.is_empty() {
            "(untitled)".to_string()
        } else {
            description
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.id, self.status, self.title())
    }
}
