//! Export module for matreq
//!
//! Provides the downstream bulk-load export and full store dumps:
//! - Sheets: the fixed `primary` and `conversion-units` layouts, as CSV
//! - JSON: machine-readable full store export
//! - YAML: human-readable full store export

pub mod csv;
pub mod json;
pub mod layout;
pub mod sheet;
pub mod yaml;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{MatreqError, MatreqResult};
use crate::models::{Request, RequestStatus, Snapshot};

pub use self::csv::{write_sheet_csv, write_sheets_csv};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use layout::{PRIMARY_COLUMNS, SECONDARY_COLUMNS};
pub use sheet::{flatten_primary, flatten_secondary, Sheet};
pub use yaml::export_full_yaml;

/// Requests to put on the sheets
///
/// With `approved_only` only approved requests are kept.
pub fn select_for_export(requests: Vec<Request>, approved_only: bool) -> Vec<Request> {
    if approved_only {
        requests
            .into_iter()
            .filter(|r| r.status == RequestStatus::Approved)
            .collect()
    } else {
        requests
    }
}

/// Validate every snapshot and flatten the requests into both sheets
///
/// Classification-constant columns are not checked: the sheet always
/// carries their literal, whatever is stored.
pub fn build_sheets(requests: &[Request]) -> MatreqResult<Vec<Sheet>> {
    for request in requests {
        let exported: Snapshot = request
            .snapshot
            .iter()
            .filter(|(key, _)| layout::constant_value(*key).is_none())
            .map(|(key, value)| (key, value.clone()))
            .collect();

        exported.validate().map_err(|e| {
            MatreqError::Export(format!("Request {} cannot be exported: {}", request.id, e))
        })?;
    }

    Ok(vec![flatten_primary(requests), flatten_secondary(requests)])
}

/// Build both sheets and write them as CSV files into `dir`
pub fn export_sheets(requests: &[Request], dir: &Path, prefix: &str) -> MatreqResult<Vec<PathBuf>> {
    let sheets = build_sheets(requests)?;
    let paths = write_sheets_csv(dir, prefix, &sheets)?;

    info!(rows = requests.len(), dir = %dir.display(), "exported sheets");
    Ok(paths)
}
