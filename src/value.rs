use crate::form::FieldKind;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A captured respondent answer, as seen by the rule engine.
///
/// `Empty` is a distinguished value (no selection made) that always abstains
/// from rule matching; it is never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Multi(Vec<String>),
    Empty,
}

// Manual implementation to handle f64
impl Eq for FieldValue {}

// Manual implementation to handle f64 by hashing its bits
impl Hash for FieldValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            FieldValue::Text(s) => s.hash(state),
            FieldValue::Number(n) => n.to_bits().hash(state),
            FieldValue::Multi(items) => items.hash(state),
            FieldValue::Empty => {} // Empty has no data to hash
        }
    }
}

impl FieldValue {
    /// Extracts a `FieldValue` from the raw captured widget state according
    /// to the field's declared kind.
    ///
    /// The extraction contract: `select`/`radio` yield the chosen option as a
    /// scalar (an empty string means nothing is checked), `checkbox` yields
    /// the list of checked values, and `range` yields a parsed number.
    /// Anything that does not fit the declared kind collapses to `Empty`.
    pub fn capture(kind: FieldKind, raw: Option<&serde_json::Value>) -> FieldValue {
        let Some(raw) = raw else {
            return FieldValue::Empty;
        };
        match kind {
            FieldKind::Select | FieldKind::Radio => match raw.as_str() {
                Some("") | None => FieldValue::Empty,
                Some(s) => FieldValue::Text(s.to_string()),
            },
            FieldKind::Checkbox => match raw.as_array() {
                Some(items) if !items.is_empty() => {
                    let checked: Vec<String> = items
                        .iter()
                        .filter_map(|v| v.as_str())
                        .map(str::to_string)
                        .collect();
                    if checked.is_empty() {
                        FieldValue::Empty
                    } else {
                        FieldValue::Multi(checked)
                    }
                }
                _ => FieldValue::Empty,
            },
            FieldKind::Range => match raw {
                serde_json::Value::Number(n) => {
                    n.as_f64().map_or(FieldValue::Empty, FieldValue::Number)
                }
                serde_json::Value::String(s) => s
                    .trim()
                    .parse::<f64>()
                    .map_or(FieldValue::Empty, FieldValue::Number),
                _ => FieldValue::Empty,
            },
        }
    }

    /// Returns `true` for the distinguished empty value.
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }

    /// The numeric reading of this value, if it has one.
    ///
    /// Threshold rules only apply to numeric values; a scalar string that
    /// parses cleanly as a number counts as numeric, a checkbox list never
    /// does.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Multi(_) | FieldValue::Empty => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            FieldValue::Multi(items) => write!(f, "[{}]", items.join(", ")),
            FieldValue::Empty => write!(f, "(empty)"),
        }
    }
}
