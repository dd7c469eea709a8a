//! Service layer for matreq
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, auditing, and cross-collection operations.

pub mod request;
pub mod session;
pub mod template;

pub use request::{RequestService, UpdateOutcome, STATUS_FIELD};
pub use session::Session;
pub use template::{clone_snapshot, list_cloneable, TemplateService};
