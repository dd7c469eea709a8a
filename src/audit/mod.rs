//! Audit system for matreq
//!
//! Records who changed which field of a request, when, and from what to what.
//!
//! # Architecture
//!
//! - `AuditEvent`: one immutable field-level or status-level change.
//! - `AuditLogger`: append-only JSONL file holding every event.
//! - `AuditTrail`: best-effort recording and newest-first listing per request.
//! - `diff_snapshots`: detects corrections between two snapshots; `summarize`
//!   turns them into the change-summary comment.
//!
//! # Example
//!
//! ```rust,ignore
//! use matreq::audit::{diff_snapshots, ActionKind};
//!
//! let trail = storage.audit();
//! for change in diff_snapshots(&before, &after) {
//!     trail.record(id, actor, ActionKind::Update, change.label,
//!                  &change.old_display, &change.new_display);
//! }
//! ```

mod diff;
mod entry;
mod logger;
mod trail;

pub use diff::{diff_snapshots, summarize, FieldChange, BLANK_PLACEHOLDER};
pub use entry::{ActionKind, AuditEvent};
pub use logger::AuditLogger;
pub use trail::AuditTrail;
