//! YAML Export functionality
//!
//! Exports the complete store to YAML for human-readable review.

use std::io::Write;

use crate::error::{MatreqError, MatreqResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full store to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> MatreqResult<()> {
    let export = FullExport::from_storage(storage)?;
    export.validate().map_err(MatreqError::Export)?;

    let header = format!(
        "# matreq full export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| MatreqError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| MatreqError::Export(e.to_string()))?;

    Ok(())
}
