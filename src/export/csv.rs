//! CSV Export functionality
//!
//! Writes bulk-load sheets as CSV files, one file per sheet.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{MatreqError, MatreqResult};

use super::sheet::Sheet;

/// Write one sheet as CSV, header first
pub fn write_sheet_csv<W: Write>(sheet: &Sheet, writer: W) -> MatreqResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(&sheet.header)?;
    for row in &sheet.rows {
        csv_writer.write_record(row)?;
    }

    csv_writer
        .flush()
        .map_err(|e| MatreqError::Export(format!("Failed to flush {}: {}", sheet.name, e)))?;
    Ok(())
}

/// File name of a sheet: `<prefix>_<sheet name>.csv`
pub fn sheet_file_name(prefix: &str, sheet: &Sheet) -> String {
    format!("{}_{}.csv", prefix, sheet.name)
}

/// Write every sheet into `dir`, returning the created paths
pub fn write_sheets_csv(dir: &Path, prefix: &str, sheets: &[Sheet]) -> MatreqResult<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| {
        MatreqError::Export(format!("Failed to create {}: {}", dir.display(), e))
    })?;

    let mut written = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        let path = dir.join(sheet_file_name(prefix, sheet));
        let file = File::create(&path).map_err(|e| {
            MatreqError::Export(format!("Failed to create {}: {}", path.display(), e))
        })?;
        write_sheet_csv(sheet, file)?;
        written.push(path);
    }

    Ok(written)
}
