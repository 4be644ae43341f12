use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar literal as it appears in a model file (defaults, choice values).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Bool(b) => f.write_str(display_bool(*b)),
            ScalarValue::Integer(n) => write!(f, "{n}"),
            // Debug keeps the fractional part ("1.0" rather than "1").
            ScalarValue::Float(n) => write!(f, "{n:?}"),
            ScalarValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Str(value.to_string())
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Integer(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Bool(value)
    }
}

/// One enumerated choice: either a `[value, label]` pair or a bare value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum ChoiceDef {
    Pair(ScalarValue, String),
    Value(ScalarValue),
}

impl fmt::Display for ChoiceDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceDef::Pair(value, label) => write!(f, "{value}:{label}"),
            ChoiceDef::Value(value) => write!(f, "{value}"),
        }
    }
}

/// Render a boolean the way generated documents always have: `True` / `False`.
pub fn display_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
