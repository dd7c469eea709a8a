//! Core data models for matreq
//!
//! This module contains the data structures of the request domain: requests
//! and their status, attribute snapshots, comments and hierarchy nodes.

pub mod comment;
pub mod hierarchy;
pub mod ids;
pub mod request;
pub mod snapshot;

pub use comment::{Comment, CommentKind, SYSTEM_WRITER};
pub use hierarchy::{HierarchyNode, LEAF_LEVEL};
pub use ids::{AuditEventId, CommentId, RequestId};
pub use request::{Request, RequestStatus};
pub use snapshot::{parse_assignment, AttrValue, Snapshot};
