//! Change detection between attribute snapshots
//!
//! Only corrections are reported: a value that goes from blank to filled is
//! a first-time entry and is skipped. Changes come out in the declared key
//! order of the new snapshot, which is also the order they are summarized in.

use crate::models::Snapshot;
use crate::schema::{self, AttrKey};

/// Placeholder shown for a blank value
pub const BLANK_PLACEHOLDER: &str = "(empty)";

/// One corrected attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub key: AttrKey,
    pub label: &'static str,
    pub old_display: String,
    pub new_display: String,
}

/// Compute the corrections from `old` to `new`
///
/// Keys missing from `new` are ignored even if present in `old`.
pub fn diff_snapshots(old: &Snapshot, new: &Snapshot) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    for (key, new_value) in new.iter() {
        let old_text = old.value(key).trimmed();
        let new_text = new_value.trimmed();

        if old_text == new_text || old_text.is_empty() {
            continue;
        }

        changes.push(FieldChange {
            key,
            label: schema::label(key),
            old_display: old_text,
            new_display: display_or_placeholder(new_text),
        });
    }

    changes
}

/// Render the one-line summary written as a comment after an update
pub fn summarize(changes: &[FieldChange]) -> Option<String> {
    if changes.is_empty() {
        return None;
    }

    let items: Vec<String> = changes
        .iter()
        .map(|c| format!("{}: {} → {}", c.label, c.old_display, c.new_display))
        .collect();

    Some(format!("{} items changed: {}", changes.len(), items.join(", ")))
}

fn display_or_placeholder(text: String) -> String {
    if text.is_empty() {
        BLANK_PLACEHOLDER.to_string()
    } else {
        text
    }
}
