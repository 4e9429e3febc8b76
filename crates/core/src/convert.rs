//! Element conversion strategies.
//!
//! [`FromValue`] covers types that can originate from JSON (function
//! parameters, declared types). [`ToValue`] covers types that can originate
//! from callers (function results, declared types). The scalar impls here
//! require an exact runtime tag match.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::ConvertError;
use crate::value::{expect_dict, ValueKind};

/// Decode a value of this type from a JSON value tree.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self, ConvertError>;
}

/// Encode a value of this type into a JSON value tree. Total.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

// ── Scalars ─────────────────────────────────────────────────────────

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        value
            .as_bool()
            .ok_or_else(|| ConvertError::mismatch(ValueKind::Boolean.name(), value))
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        match value {
            Value::Number(n) if n.is_f64() => {
                Err(ConvertError::mismatch(ValueKind::Integer.name(), value))
            }
            Value::Number(n) => n.as_i64().ok_or_else(|| ConvertError::out_of_range(n)),
            other => Err(ConvertError::mismatch(ValueKind::Integer.name(), other)),
        }
    }
}

impl ToValue for i64 {
    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        match value {
            Value::Number(n) if n.is_f64() => n
                .as_f64()
                .ok_or_else(|| ConvertError::mismatch(ValueKind::Double.name(), value)),
            other => Err(ConvertError::mismatch(ValueKind::Double.name(), other)),
        }
    }
}

impl ToValue for f64 {
    /// Non-finite doubles have no JSON representation and encode as null.
    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| ConvertError::mismatch(ValueKind::String.name(), value))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_owned())
    }
}

// ── Wrappers ────────────────────────────────────────────────────────

impl<T: FromValue> FromValue for Box<T> {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        T::from_value(value).map(Box::new)
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

/// An absent optional encodes as null. Records skip absent optionals
/// entirely instead of calling this.
impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

// ── Additional-properties dictionaries ──────────────────────────────

/// A dictionary whose every value decodes as `T`.
impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        expect_dict(value)?
            .iter()
            .map(|(k, v)| {
                T::from_value(v)
                    .map(|t| (k.clone(), t))
                    .map_err(|e| e.in_field(k))
            })
            .collect()
    }
}

impl<T: ToValue> ToValue for BTreeMap<String, T> {
    fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .iter()
            .map(|(k, v)| (k.clone(), v.to_value()))
            .collect();
        Value::Object(map)
    }
}
