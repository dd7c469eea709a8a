//! Attribute schema
//!
//! Static, read-only description of every attribute a master record can
//! carry. All lookups are total: a key from the closed `AttrKey` enumeration
//! always has an entry, and the raw-string lookups fall back gracefully for
//! codes that are not recognized (e.g. labels read back from old audit data).

pub mod field;
pub mod group;
pub mod key;
pub mod table;

pub use field::FieldKind;
pub use group::Group;
pub use key::AttrKey;
pub use table::{AttributeDef, ATTRIBUTES};

use crate::error::{MatreqError, MatreqResult};
use crate::models::{AttrValue, Snapshot};

/// Full definition of an attribute
pub fn attribute(key: AttrKey) -> &'static AttributeDef {
    &ATTRIBUTES[key as usize]
}

/// Display label of an attribute
pub fn label(key: AttrKey) -> &'static str {
    attribute(key).label
}

/// Display label for a raw code, falling back to the code itself
pub fn label_for(code: &str) -> &str {
    match code.parse::<AttrKey>() {
        Ok(key) => label(key),
        Err(_) => code,
    }
}

/// Group of an attribute
pub fn group(key: AttrKey) -> Group {
    attribute(key).group
}

/// Group for a raw code, if the code is recognized
pub fn group_for(code: &str) -> Option<Group> {
    code.parse::<AttrKey>().ok().map(group)
}

pub fn kind(key: AttrKey) -> FieldKind {
    attribute(key).kind
}

pub fn is_required(key: AttrKey) -> bool {
    attribute(key).required
}

pub fn is_fixed(key: AttrKey) -> bool {
    attribute(key).fixed
}

/// Typed default value of an attribute, if it has one
pub fn default_value(key: AttrKey) -> Option<AttrValue> {
    let def = attribute(key);
    def.default.and_then(|raw| def.kind.coerce(raw).ok())
}

/// Permitted codes for enumerated attributes
pub fn permitted_values(key: AttrKey) -> Option<&'static [&'static str]> {
    attribute(key).kind.permitted_values()
}

/// Attributes shown under a group, in declaration order
pub fn attributes_in(group: Group) -> impl Iterator<Item = &'static AttributeDef> {
    ATTRIBUTES.iter().filter(move |def| def.group == group)
}

/// Keys that must be filled for a record to be complete
pub fn required_keys() -> impl Iterator<Item = AttrKey> {
    ATTRIBUTES.iter().filter(|def| def.required).map(|def| def.key)
}

/// Parse `value` for `key` from user input
pub fn coerce(key: AttrKey, raw: &str) -> MatreqResult<AttrValue> {
    kind(key)
        .coerce(raw)
        .map_err(|e| MatreqError::Validation(format!("{} ({}): {}", label(key), key, e)))
}

/// Check every value of a snapshot against its kind and fixed flag
///
/// All problems are collected into a single validation error so the caller
/// can correct them in one pass.
pub fn validate_snapshot(snapshot: &Snapshot) -> MatreqResult<()> {
    let mut problems = Vec::new();

    for (key, value) in snapshot.iter() {
        let def = attribute(key);

        if let Err(e) = def.kind.validate(value) {
            problems.push(format!("{} ({}): {}", def.label, key, e));
            continue;
        }

        // A present fixed key must carry its default; blank counts as an edit
        if def.fixed {
            let expected = def.default.unwrap_or_default();
            if value.trimmed() != expected {
                problems.push(format!(
                    "{} ({}) is fixed to '{}'",
                    def.label, key, expected
                ));
            }
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(MatreqError::Validation(problems.join("; ")))
    }
}

/// Required attributes that are blank or absent in `snapshot`
pub fn missing_required(snapshot: &Snapshot) -> Vec<AttrKey> {
    required_keys()
        .filter(|key| snapshot.value(*key).is_blank())
        .collect()
}
