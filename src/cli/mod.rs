//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod hierarchy;
pub mod request;
pub mod schema;
pub mod template;

pub use export::{handle_export_command, ExportCommands};
pub use hierarchy::{handle_hierarchy_command, HierarchyCommands};
pub use request::{handle_request_command, save_draft, RequestCommands};
pub use schema::{handle_schema_command, SchemaCommands};
pub use template::{handle_template_command, TemplateCommands};
