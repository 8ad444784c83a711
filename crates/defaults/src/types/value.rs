//! Property values for composed defaults.
//!
//! Responsibilities:
//! - Define `PropertyValue`, the scalar payload of every default entry.
//! - Convert values into `config::Value` for builder registration.
//!
//! Does NOT handle:
//! - Placeholder interpolation: `${...}` references inside text values are
//!   opaque here and resolved by the host's configuration engine.
//!
//! Invariants:
//! - Values serialize untagged: booleans and integers stay typed instead of
//!   collapsing to strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar default value: boolean, integer, or (possibly templated) text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl PropertyValue {
    /// The boolean payload, if this value is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The integer payload, if this value is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// The text payload, if this value is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(value) => write!(f, "{value}"),
            PropertyValue::Int(value) => write!(f, "{value}"),
            PropertyValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<PropertyValue> for config::Value {
    fn from(value: PropertyValue) -> Self {
        match value {
            PropertyValue::Bool(value) => config::Value::from(value),
            PropertyValue::Int(value) => config::Value::from(value),
            PropertyValue::Text(value) => config::Value::from(value),
        }
    }
}
