//! Storage initialization
//!
//! Handles first-run setup: directories and empty collection files

use crate::config::paths::MatreqPaths;
use crate::error::MatreqError;

use super::file_io::write_json_atomic;
use super::hierarchy::HierarchyData;

/// Initialize storage for a fresh installation
///
/// Existing files are left untouched, so this is safe to run twice.
pub fn initialize_storage(paths: &MatreqPaths) -> Result<(), MatreqError> {
    paths.ensure_directories()?;

    if !paths.requests_file().exists() {
        write_json_atomic(paths.requests_file(), &serde_json::json!({ "requests": [] }))?;
    }

    if !paths.comments_file().exists() {
        write_json_atomic(paths.comments_file(), &serde_json::json!({ "comments": [] }))?;
    }

    if !paths.hierarchy_file().exists() {
        write_json_atomic(paths.hierarchy_file(), &HierarchyData::default())?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &MatreqPaths) -> bool {
    !paths.requests_file().exists()
}
