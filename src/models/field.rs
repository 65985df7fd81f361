use serde::Serialize;
use std::fmt;

/// A single field value read from a record, either numeric or textual.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }

    /// Compare against user input.
    /// Text is trimmed and compared case-insensitively; numbers compare by value.
    pub fn matches(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(s) => normalize(s) == normalize(needle),
            FieldValue::Number(n) => needle.trim().parse::<f64>().is_ok_and(|v| v == *n),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
