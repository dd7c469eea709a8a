//! Field kinds
//!
//! Every attribute carries one `FieldKind`. Input coercion, validation and
//! rendering all dispatch on it, so no attribute needs special handling.

use chrono::NaiveDate;

use crate::models::AttrValue;

/// Date format accepted for date-kind attributes
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Value stored in a set flag
pub const FLAG_SET: &str = "X";

/// How an attribute is entered, validated and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Decimal number
    Number,
    /// Calendar date (YYYY-MM-DD)
    Date,
    /// Checkbox stored as "X" or blank
    Flag,
    /// One of a fixed set of codes
    Select(&'static [&'static str]),
    /// Leaf code of the external 4-level category hierarchy
    Hierarchy,
}

impl FieldKind {
    /// Short name shown in schema listings
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Flag => "flag",
            FieldKind::Select(_) => "select",
            FieldKind::Hierarchy => "hierarchy",
        }
    }

    /// Permitted codes for enumerated kinds
    pub fn permitted_values(&self) -> Option<&'static [&'static str]> {
        match self {
            FieldKind::Select(values) => Some(values),
            FieldKind::Flag => Some(&[FLAG_SET]),
            _ => None,
        }
    }

    /// Turn raw user input into a typed value and validate it
    pub fn coerce(&self, raw: &str) -> Result<AttrValue, String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(AttrValue::Blank);
        }

        let value = match self {
            FieldKind::Number => raw
                .parse::<f64>()
                .map(AttrValue::Number)
                .map_err(|_| format!("'{}' is not a number", raw))?,
            _ => AttrValue::Text(raw.to_string()),
        };

        self.validate(&value)?;
        Ok(value)
    }

    /// Check a stored value against this kind
    ///
    /// Blank is always accepted; whether a blank is allowed is a question of
    /// the required flag, not of the kind.
    pub fn validate(&self, value: &AttrValue) -> Result<(), String> {
        if value.is_blank() {
            return Ok(());
        }

        match (self, value) {
            (FieldKind::Text, _) => Ok(()),
            (FieldKind::Number, AttrValue::Number(n)) => {
                if n.is_finite() {
                    Ok(())
                } else {
                    Err(format!("'{}' is not a finite number", n))
                }
            }
            (FieldKind::Number, other) => {
                let text = other.trimmed();
                text.parse::<f64>()
                    .map(|_| ())
                    .map_err(|_| format!("'{}' is not a number", text))
            }
            (FieldKind::Date, other) => {
                let text = other.trimmed();
                NaiveDate::parse_from_str(&text, DATE_FORMAT)
                    .map(|_| ())
                    .map_err(|_| format!("'{}' is not a date (expected YYYY-MM-DD)", text))
            }
            (FieldKind::Flag, other) => {
                if other.trimmed() == FLAG_SET {
                    Ok(())
                } else {
                    Err(format!("'{}' is not a flag value (use X or blank)", other.trimmed()))
                }
            }
            (FieldKind::Select(values), other) => {
                let text = other.trimmed();
                if values.contains(&text.as_str()) {
                    Ok(())
                } else {
                    Err(format!(
                        "'{}' is not one of: {}",
                        text,
                        values.join(", ")
                    ))
                }
            }
            (FieldKind::Hierarchy, AttrValue::Number(_)) => {
                Err("hierarchy codes must be text".to_string())
            }
            (FieldKind::Hierarchy, _) => Ok(()),
        }
    }

    /// Human-readable rendering of a value
    pub fn render(&self, value: &AttrValue) -> String {
        if value.is_blank() {
            return String::new();
        }

        match self {
            FieldKind::Flag if value.trimmed() == FLAG_SET => "Yes".to_string(),
            _ => value.trimmed(),
        }
    }
}
