//! Attribute snapshots
//!
//! A snapshot is the full attribute-key → value mapping of one record at a
//! point in time. Keys come from the closed `AttrKey` enumeration, so an
//! unknown attribute can never enter a snapshot; values are text, number or
//! blank.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::MatreqResult;
use crate::schema::{self, AttrKey};

/// Value of one attribute
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Number(f64),
    Text(String),
    #[default]
    Blank,
}

static BLANK: AttrValue = AttrValue::Blank;

impl AttrValue {
    /// Create a text value
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Blank means absent, null, or text that is empty after trimming
    pub fn is_blank(&self) -> bool {
        match self {
            AttrValue::Blank => true,
            AttrValue::Text(s) => s.trim().is_empty(),
            AttrValue::Number(_) => false,
        }
    }

    /// Trimmed string form used for comparison and display
    pub fn trimmed(&self) -> String {
        match self {
            AttrValue::Blank => String::new(),
            AttrValue::Text(s) => s.trim().to_string(),
            AttrValue::Number(n) => n.to_string(),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.trimmed())
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

/// Attribute values of one record, iterated in declared key order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(BTreeMap<AttrKey, AttrValue>);

impl Snapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Create a snapshot holding every schema default
    pub fn with_defaults() -> Self {
        let mut snapshot = Self::new();
        snapshot.fill_defaults();
        snapshot
    }

    /// Build a snapshot from `KEY=VALUE` assignments, coercing each value by its kind
    pub fn from_assignments<I, S>(assignments: I) -> MatreqResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut snapshot = Self::new();
        for assignment in assignments {
            let (key, value) = parse_assignment(assignment.as_ref())?;
            snapshot.set(key, value);
        }
        Ok(snapshot)
    }

    /// Get a value if the key is present
    pub fn get(&self, key: AttrKey) -> Option<&AttrValue> {
        self.0.get(&key)
    }

    /// Get a value, treating an absent key as blank
    pub fn value(&self, key: AttrKey) -> &AttrValue {
        self.0.get(&key).unwrap_or(&BLANK)
    }

    /// Set a value
    pub fn set(&mut self, key: AttrKey, value: impl Into<AttrValue>) {
        self.0.insert(key, value.into());
    }

    /// Remove a key entirely
    pub fn remove(&mut self, key: AttrKey) -> Option<AttrValue> {
        self.0.remove(&key)
    }

    pub fn contains(&self, key: AttrKey) -> bool {
        self.0.contains_key(&key)
    }

    /// Keys present, in declared order
    pub fn keys(&self) -> impl Iterator<Item = AttrKey> + '_ {
        self.0.keys().copied()
    }

    /// Entries present, in declared order
    pub fn iter(&self) -> impl Iterator<Item = (AttrKey, &AttrValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    /// Mutable access to every value
    pub fn values_mut(&mut self) -> impl Iterator<Item = (AttrKey, &mut AttrValue)> {
        self.0.iter_mut().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A new snapshot with `partial` laid over this one
    pub fn merged(&self, partial: &Snapshot) -> Snapshot {
        let mut merged = self.clone();
        for (key, value) in partial.iter() {
            merged.set(key, value.clone());
        }
        merged
    }

    /// Insert schema defaults for keys that are not present
    pub fn fill_defaults(&mut self) {
        for key in AttrKey::ALL {
            if !self.contains(*key) {
                if let Some(default) = schema::default_value(*key) {
                    self.set(*key, default);
                }
            }
        }
    }

    /// Check every value against the schema
    pub fn validate(&self) -> MatreqResult<()> {
        schema::validate_snapshot(self)
    }

    /// Required attributes that are still blank
    pub fn missing_required(&self) -> Vec<AttrKey> {
        schema::missing_required(self)
    }

    /// The assigned master code, if any
    pub fn master_code(&self) -> Option<String> {
        let value = self.value(AttrKey::Matnr);
        if value.is_blank() {
            None
        } else {
            Some(value.trimmed())
        }
    }

    /// Trimmed description used as a record title
    pub fn description(&self) -> String {
        self.value(AttrKey::Maktx).trimmed()
    }
}

impl FromIterator<(AttrKey, AttrValue)> for Snapshot {
    fn from_iter<T: IntoIterator<Item = (AttrKey, AttrValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse a single `KEY=VALUE` assignment
pub fn parse_assignment(assignment: &str) -> MatreqResult<(AttrKey, AttrValue)> {
    let (raw_key, raw_value) = assignment.split_once('=').ok_or_else(|| {
        crate::error::MatreqError::Validation(format!(
            "Invalid assignment '{}'. Use KEY=VALUE",
            assignment
        ))
    })?;

    let key: AttrKey = raw_key
        .parse()
        .map_err(crate::error::MatreqError::Validation)?;
    let value = schema::coerce(key, raw_value)?;
    Ok((key, value))
}
