//! Runtime tags of the generic JSON value tree.
//!
//! The value tree itself is `serde_json::Value`. This module only adds the
//! closed tag set used for exact-match dispatch and error reporting.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use crate::error::ConvertError;

/// The runtime tag of a [`Value`].
///
/// Numbers are split by their stored representation: a number parsed or
/// constructed as an integer is `Integer`, one stored as a float is `Double`.
/// No widening happens between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Double,
    String,
    List,
    Dictionary,
}

impl ValueKind {
    /// Classify a value by its runtime tag.
    pub fn of(value: &Value) -> ValueKind {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(n) if n.is_f64() => ValueKind::Double,
            Value::Number(_) => ValueKind::Integer,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::List,
            Value::Object(_) => ValueKind::Dictionary,
        }
    }

    /// Returns a human-readable type name for error messages.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Double => "double",
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::Dictionary => "dictionary",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Borrow `value` as a list, or fail with a shape mismatch.
pub fn expect_list(value: &Value) -> Result<&[Value], ConvertError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(ConvertError::mismatch(ValueKind::List.name(), other)),
    }
}

/// Borrow `value` as a dictionary, or fail with a shape mismatch.
pub fn expect_dict(value: &Value) -> Result<&Map<String, Value>, ConvertError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ConvertError::mismatch(ValueKind::Dictionary.name(), other)),
    }
}
