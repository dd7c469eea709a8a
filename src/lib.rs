//! matreq - change-request tracking for product master records
//!
//! This library provides the core functionality of matreq: requesters submit
//! new or corrected master records, reviewers move them through an approval
//! workflow, every correction is recorded field by field, and approved
//! records are flattened into the fixed sheets of the downstream bulk-load
//! format.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `schema`: The static attribute schema (keys, labels, groups, kinds)
//! - `models`: Core data models (requests, snapshots, comments, hierarchy)
//! - `storage`: JSON file storage layer
//! - `audit`: Change detection and the field-level audit trail
//! - `services`: Request lifecycle, template cloning and sessions
//! - `export`: Sheet flattening and full store exports
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use matreq::config::{paths::MatreqPaths, settings::Settings};
//! use matreq::services::Session;
//! use matreq::storage::Storage;
//!
//! let paths = MatreqPaths::new()?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//!
//! let session = Session::start(&storage, "kim")?;
//! let request = session.requests().create(&snapshot, session.user())?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod schema;
pub mod services;
pub mod storage;

pub use error::{MatreqError, MatreqResult};
