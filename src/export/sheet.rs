//! Flattening of requests into the bulk-load sheets
//!
//! Both functions are pure: they read the given requests and nothing else.

use serde::Serialize;

use crate::models::Request;
use crate::schema::AttrKey;

use super::layout::{constant_value, PRIMARY_COLUMNS, PRIMARY_SHEET, SECONDARY_COLUMNS, SECONDARY_SHEET};

/// A named table of string cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sheet {
    pub name: &'static str,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    fn new(name: &'static str, columns: &[AttrKey]) -> Self {
        Self {
            name,
            header: columns.iter().map(|k| k.code().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell of `row` under the header `code`
    pub fn cell(&self, row: usize, code: &str) -> Option<&str> {
        let column = self.header.iter().position(|h| h == code)?;
        self.rows.get(row)?.get(column).map(String::as_str)
    }
}

/// One row per request over `PRIMARY_COLUMNS`
///
/// Classification-constant columns export their literal whatever is stored.
pub fn flatten_primary(requests: &[Request]) -> Sheet {
    let mut sheet = Sheet::new(PRIMARY_SHEET, PRIMARY_COLUMNS);

    for request in requests {
        let row = PRIMARY_COLUMNS
            .iter()
            .map(|key| {
                constant_value(*key).unwrap_or_else(|| request.snapshot.value(*key).trimmed())
            })
            .collect();
        sheet.rows.push(row);
    }

    sheet
}

/// One row per request over `SECONDARY_COLUMNS`
///
/// A request without an assigned master code yields a blank key cell.
pub fn flatten_secondary(requests: &[Request]) -> Sheet {
    let mut sheet = Sheet::new(SECONDARY_SHEET, SECONDARY_COLUMNS);

    for request in requests {
        let row = SECONDARY_COLUMNS
            .iter()
            .map(|key| request.snapshot.value(*key).trimmed())
            .collect();
        sheet.rows.push(row);
    }

    sheet
}
